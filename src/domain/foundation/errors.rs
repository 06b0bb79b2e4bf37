//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while validating inputs or running a ranking.
#[derive(Debug, Clone, Error)]
pub enum RankError {
    #[error("Decision matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Row '{label}' has {found} scores, expected {expected}")]
    RowWidthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("Row '{label}' has a non-finite score for criterion '{criterion}'")]
    NonFiniteScore { label: String, criterion: String },

    #[error("Declared {found} criteria for a matrix with {expected} columns")]
    CriteriaCountMismatch { expected: usize, found: usize },

    #[error("Weight must be a non-negative finite number, got {value}")]
    InvalidWeight { value: f64 },

    #[error("Criterion weights must not all be zero")]
    ZeroWeightSum,

    #[error("Criterion '{criterion}' is zero for every alternative")]
    DegenerateColumn { criterion: String },

    #[error("{} alternative(s) equidistant from ideal and worst solutions", .labels.len())]
    DegenerateRanking { labels: Vec<String> },
}

impl RankError {
    /// Creates a row width mismatch error.
    pub fn row_width_mismatch(label: impl Into<String>, expected: usize, found: usize) -> Self {
        RankError::RowWidthMismatch {
            label: label.into(),
            expected,
            found,
        }
    }

    /// Creates a non-finite score error.
    pub fn non_finite_score(label: impl Into<String>, criterion: impl Into<String>) -> Self {
        RankError::NonFiniteScore {
            label: label.into(),
            criterion: criterion.into(),
        }
    }

    /// Creates a degenerate column error.
    pub fn degenerate_column(criterion: impl Into<String>) -> Self {
        RankError::DegenerateColumn {
            criterion: criterion.into(),
        }
    }
}
