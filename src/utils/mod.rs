//! Shared utilities - logging lifecycle, terminal styling, progress helpers

pub mod logging;
pub mod progress;
pub mod styling;

pub use logging::*;
pub use progress::*;
pub use styling::*;
