//! Rank Sherpa - TOPSIS ranking for algorithm and model selection
//!
//! This crate ranks alternatives (e.g. clustering algorithm and parameter
//! combinations) against weighted, possibly conflicting quality metrics
//! by their closeness to an ideal solution.

pub mod adapters;
pub mod domain;
