//! Tabular boundary error types

use thiserror::Error;

use crate::domain::foundation::RankError;

/// Errors that can occur while reading, parsing, or writing decision tables
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to access table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Table needs a label column and at least one metric column, found {found}")]
    TooFewColumns { found: usize },

    #[error("Line {line}: criterion '{criterion}' has non-numeric value '{value}'")]
    InvalidScore {
        line: usize,
        criterion: String,
        value: String,
    },

    #[error("Weight '{value}' is not a non-negative number")]
    InvalidWeightToken { value: String },

    #[error("Impact '{token}' must be '+' or '-'")]
    InvalidImpact { token: String },

    #[error("Declared {weights} weight(s) but {impacts} impact(s)")]
    DeclarationMismatch { weights: usize, impacts: usize },

    #[error(transparent)]
    Rank(#[from] RankError),
}
