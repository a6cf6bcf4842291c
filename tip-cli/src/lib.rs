pub mod config;
pub mod logging;
pub mod render;
pub mod repl;
pub mod state;

pub use state::TipSession;
