//! The tip calculation engine.
//!
//! Raw form text goes through the [`Sanitizer`], the sanitized inputs go
//! through [`recompute`], and [`TipPresets`] covers the one-tap and stepper
//! shortcuts for the tip percent and party size.

pub mod common;
pub mod presets;
pub mod sanitize;
pub mod tip;

pub use presets::TipPresets;
pub use sanitize::Sanitizer;
pub use tip::recompute;
