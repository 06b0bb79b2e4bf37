//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that operate on domain objects
//! to rank alternatives against conflicting weighted criteria.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated alternatives x criteria score table
//! - `Criterion` - Per-column weight and benefit/cost direction
//! - `TopsisRanker` - Closeness scoring against ideal-best and ideal-worst
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results, so a ranking is safe to
//! re-run from multiple callers with different inputs.

mod criteria;
mod decision_matrix;
mod topsis;

// Re-export all public types
pub use criteria::Criterion;
pub use decision_matrix::{Alternative, DecisionMatrix, DecisionMatrixBuilder};
pub use topsis::{DegeneratePolicy, RankedAlternative, Ranking, TopsisRanker};
