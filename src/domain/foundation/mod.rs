//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the ranking domain.

mod closeness;
mod direction;
mod errors;
mod weight;

pub use closeness::Closeness;
pub use direction::Direction;
pub use errors::RankError;
pub use weight::Weight;
