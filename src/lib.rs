//! Prefilter-features: Morphology Feature Preselection Library
//!
//! A library for deciding which feature columns of a per-site morphology
//! dataset are carried into profile construction. This is a preselection
//! step; an additional round of feature selection occurs at a later stage.

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod utils;
