pub mod calculations;
pub mod guide;
pub mod models;

pub use calculations::{recompute, Sanitizer, TipPresets};
pub use models::*;
