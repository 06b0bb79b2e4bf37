//! Closeness value object (relative proximity to the ideal solution).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0.0 and 1.0 inclusive.
///
/// 1.0 means the alternative coincides with the ideal-best solution,
/// 0.0 means it coincides with the ideal-worst.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Closeness(f64);

impl Closeness {
    /// Zero closeness (coincides with the ideal-worst).
    pub const ZERO: Self = Self(0.0);

    /// Full closeness (coincides with the ideal-best).
    pub const ONE: Self = Self(1.0);

    /// Creates a new Closeness, clamping to valid range.
    ///
    /// Non-finite values become zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Closeness {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Closeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
