//! TOPSIS Ranker - Closeness scoring against ideal-best and ideal-worst solutions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Closeness, RankError};

use super::{Criterion, DecisionMatrix};

/// What to do when an alternative is equidistant from both ideal solutions.
///
/// That happens when ideal-best and ideal-worst coincide on every column,
/// e.g. a single-row matrix. The affected rows carry no ranking signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Score the affected rows as zero and log a warning.
    #[default]
    Warn,
    /// Reject the whole ranking.
    Fail,
}

/// One alternative with its computed closeness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub label: String,
    pub closeness: Closeness,
}

/// The ranked output, sorted descending by closeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Alternatives sorted descending by closeness; ties keep input order.
    pub entries: Vec<RankedAlternative>,
    /// Labels of alternatives scored zero by convention (see DegeneratePolicy).
    pub degenerate_labels: Vec<String>,
}

impl Ranking {
    /// Returns the recommended alternative, if any.
    pub fn top(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }
}

/// TOPSIS ranking functions.
pub struct TopsisRanker;

impl TopsisRanker {
    /// Ranks the matrix rows, warning on degenerate alternatives.
    pub fn rank(matrix: &DecisionMatrix, criteria: &[Criterion]) -> Result<Ranking, RankError> {
        Self::rank_with(matrix, criteria, DegeneratePolicy::default())
    }

    /// Ranks the matrix rows by closeness to the ideal solution.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm, then multiply by its weight
    /// 2. Ideal-best per column = max for benefit, min for cost; ideal-worst the reverse
    /// 3. For each row, Euclidean distance to ideal-best (s_best) and ideal-worst (s_worst)
    /// 4. Closeness = s_worst / (s_best + s_worst), in [0, 1]
    /// 5. Stable sort descending by closeness, so ties keep input order
    ///
    /// # Edge Cases
    /// - Column of all zeros: DegenerateColumn, the division is undefined
    /// - s_best + s_worst == 0 for a row: scored as zero, handled per `policy`
    /// - Single-row matrix: every row is degenerate (ideal-best == ideal-worst)
    pub fn rank_with(
        matrix: &DecisionMatrix,
        criteria: &[Criterion],
        policy: DegeneratePolicy,
    ) -> Result<Ranking, RankError> {
        Self::validate(matrix, criteria)?;

        let weighted = Self::weighted_normalized(matrix, criteria)?;
        let (best, worst) = Self::ideal_solutions(&weighted, criteria);

        let mut entries = Vec::with_capacity(weighted.len());
        let mut degenerate_labels = Vec::new();

        for (row, alternative) in weighted.iter().zip(matrix.rows()) {
            let s_best = Self::euclidean(row, &best);
            let s_worst = Self::euclidean(row, &worst);
            let separation = s_best + s_worst;

            let closeness = if separation == 0.0 {
                degenerate_labels.push(alternative.label.clone());
                Closeness::ZERO
            } else {
                Closeness::new(s_worst / separation)
            };

            entries.push(RankedAlternative {
                label: alternative.label.clone(),
                closeness,
            });
        }

        if !degenerate_labels.is_empty() {
            match policy {
                DegeneratePolicy::Fail => {
                    return Err(RankError::DegenerateRanking {
                        labels: degenerate_labels,
                    });
                }
                DegeneratePolicy::Warn => {
                    tracing::warn!(
                        labels = ?degenerate_labels,
                        "alternatives equidistant from ideal and worst solutions, scored as zero"
                    );
                }
            }
        }

        entries.sort_by(|a, b| b.closeness.value().total_cmp(&a.closeness.value()));

        Ok(Ranking {
            entries,
            degenerate_labels,
        })
    }

    /// Checks matrix shape and criterion weights before any numeric work.
    fn validate(matrix: &DecisionMatrix, criteria: &[Criterion]) -> Result<(), RankError> {
        if matrix.alternative_count() == 0 || matrix.criterion_count() == 0 {
            return Err(RankError::EmptyMatrix);
        }

        // Rows can arrive unchecked through deserialization.
        for row in matrix.rows() {
            if row.scores.len() != matrix.criterion_count() {
                return Err(RankError::row_width_mismatch(
                    &row.label,
                    matrix.criterion_count(),
                    row.scores.len(),
                ));
            }
            for (j, score) in row.scores.iter().enumerate() {
                if !score.is_finite() {
                    return Err(RankError::non_finite_score(
                        &row.label,
                        &matrix.criterion_names()[j],
                    ));
                }
            }
        }

        if criteria.len() != matrix.criterion_count() {
            return Err(RankError::CriteriaCountMismatch {
                expected: matrix.criterion_count(),
                found: criteria.len(),
            });
        }

        // Weights can arrive unchecked through deserialization.
        let mut sum = 0.0;
        for criterion in criteria {
            let weight = criterion.weight.value();
            if !weight.is_finite() || weight < 0.0 {
                return Err(RankError::InvalidWeight { value: weight });
            }
            sum += weight;
        }
        if sum == 0.0 {
            return Err(RankError::ZeroWeightSum);
        }

        Ok(())
    }

    /// Divides each column by its Euclidean norm and applies the weight.
    fn weighted_normalized(
        matrix: &DecisionMatrix,
        criteria: &[Criterion],
    ) -> Result<Vec<Vec<f64>>, RankError> {
        let rows = matrix.rows();
        let mut weighted = vec![vec![0.0; matrix.criterion_count()]; rows.len()];

        for (j, criterion) in criteria.iter().enumerate() {
            let norm = rows
                .iter()
                .map(|row| row.scores[j] * row.scores[j])
                .sum::<f64>()
                .sqrt();
            if norm == 0.0 {
                return Err(RankError::degenerate_column(&matrix.criterion_names()[j]));
            }

            let weight = criterion.weight.value();
            for (i, row) in rows.iter().enumerate() {
                weighted[i][j] = row.scores[j] / norm * weight;
            }
        }

        Ok(weighted)
    }

    /// Computes per-column ideal-best and ideal-worst reference points.
    fn ideal_solutions(weighted: &[Vec<f64>], criteria: &[Criterion]) -> (Vec<f64>, Vec<f64>) {
        let mut best = Vec::with_capacity(criteria.len());
        let mut worst = Vec::with_capacity(criteria.len());

        for (j, criterion) in criteria.iter().enumerate() {
            let max = weighted
                .iter()
                .map(|row| row[j])
                .fold(f64::NEG_INFINITY, f64::max);
            let min = weighted
                .iter()
                .map(|row| row[j])
                .fold(f64::INFINITY, f64::min);

            if criterion.direction.is_benefit() {
                best.push(max);
                worst.push(min);
            } else {
                best.push(min);
                worst.push(max);
            }
        }

        (best, worst)
    }

    /// Euclidean distance between a row and a reference point.
    fn euclidean(row: &[f64], reference: &[f64]) -> f64 {
        row.iter()
            .zip(reference)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}
