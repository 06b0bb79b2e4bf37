//! Weight value object for criterion importance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RankError;

/// A non-negative finite criterion weight.
///
/// Weights express relative importance and need not sum to one;
/// the ranking only depends on their relative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Zero weight (criterion contributes nothing).
    pub const ZERO: Self = Self(0.0);

    /// Unit weight.
    pub const ONE: Self = Self(1.0);

    /// Creates a new Weight, clamping to valid range.
    ///
    /// Negative and non-finite values become zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Creates a Weight, returning error if negative or non-finite.
    pub fn try_new(value: f64) -> Result<Self, RankError> {
        if !value.is_finite() || value < 0.0 {
            return Err(RankError::InvalidWeight { value });
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the weight is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
