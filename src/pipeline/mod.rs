//! Pipeline module - feature scanning, prefilter flagging, and guarded output

pub mod loader;
pub mod prefilter;
pub mod writer;

pub use loader::*;
pub use prefilter::*;
pub use writer::*;
