//! Criterion definition - weight and direction per matrix column.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Direction, Weight};

/// How one criterion column contributes to the ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub weight: Weight,
    pub direction: Direction,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(weight: Weight, direction: Direction) -> Self {
        Self { weight, direction }
    }

    /// Creates a benefit criterion, clamping the weight to valid range.
    pub fn benefit(weight: f64) -> Self {
        Self::new(Weight::new(weight), Direction::Benefit)
    }

    /// Creates a cost criterion, clamping the weight to valid range.
    pub fn cost(weight: f64) -> Self {
        Self::new(Weight::new(weight), Direction::Cost)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.weight, self.direction)
    }
}
