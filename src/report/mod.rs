//! Report module - console summary of the prefilter run

mod summary;

pub use summary::PrefilterSummary;
