//! Decision Matrix - Core data structure for multi-criteria ranking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::RankError;

/// A labelled row of the decision matrix.
///
/// The label identifies the alternative (e.g. "KMeans, k=3, normalized")
/// and plays no part in the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub label: String,
    pub scores: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative with its metric scores.
    pub fn new(label: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            scores,
        }
    }
}

/// The decision matrix mapping alternatives x criteria to metric scores.
///
/// Validated at construction: at least one row and one column, every row
/// as wide as the criterion list, every score finite. Fields stay private
/// so code must go through the builder; deserialized values skip it and
/// are re-validated by the ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    criterion_names: Vec<String>,
    rows: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the ordered criterion names.
    pub fn criterion_names(&self) -> &[String] {
        &self.criterion_names
    }

    /// Returns the ordered alternatives.
    pub fn rows(&self) -> &[Alternative] {
        &self.rows
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criterion_names.len()
    }
}

/// Builder for constructing validated DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criterion_names: Vec<String>,
    rows: Vec<Alternative>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criterion_names = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds a labelled row of scores.
    pub fn row(mut self, label: impl Into<String>, scores: Vec<f64>) -> Self {
        self.rows.push(Alternative::new(label, scores));
        self
    }

    /// Builds the decision matrix, validating its shape.
    pub fn build(self) -> Result<DecisionMatrix, RankError> {
        if self.criterion_names.is_empty() || self.rows.is_empty() {
            return Err(RankError::EmptyMatrix);
        }

        let expected = self.criterion_names.len();
        for row in &self.rows {
            if row.scores.len() != expected {
                return Err(RankError::row_width_mismatch(
                    &row.label,
                    expected,
                    row.scores.len(),
                ));
            }
            for (j, score) in row.scores.iter().enumerate() {
                if !score.is_finite() {
                    return Err(RankError::non_finite_score(
                        &row.label,
                        &self.criterion_names[j],
                    ));
                }
            }
        }

        Ok(DecisionMatrix {
            criterion_names: self.criterion_names,
            rows: self.rows,
        })
    }
}
