//! Direction value object for criterion orientation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a criterion rewards higher or lower values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Higher is better (e.g. silhouette score).
    #[default]
    Benefit,
    /// Lower is better (e.g. Davies-Bouldin score).
    Cost,
}

impl Direction {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Benefit => "benefit",
            Direction::Cost => "cost",
        }
    }

    /// Returns true if higher values are better.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Direction::Benefit)
    }

    /// Returns true if lower values are better.
    pub fn is_cost(&self) -> bool {
        matches!(self, Direction::Cost)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
