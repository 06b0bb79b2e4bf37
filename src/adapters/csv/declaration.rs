//! Criteria declaration parsing.
//!
//! Weights and impacts arrive as comma-separated strings alongside the
//! table, e.g. `--weights "0.4,0.3,0.3" --impacts "+,+,-"`. An impact of
//! `+` marks a benefit criterion, `-` a cost criterion.

use crate::domain::analysis::Criterion;
use crate::domain::foundation::{Direction, Weight};

use super::TableError;

/// Parses a comma-separated weight declaration.
pub fn parse_weights(input: &str) -> Result<Vec<Weight>, TableError> {
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            let value: f64 = token.parse().map_err(|_| TableError::InvalidWeightToken {
                value: token.to_string(),
            })?;
            Weight::try_new(value).map_err(|_| TableError::InvalidWeightToken {
                value: token.to_string(),
            })
        })
        .collect()
}

/// Parses a comma-separated impact declaration.
pub fn parse_impacts(input: &str) -> Result<Vec<Direction>, TableError> {
    input
        .split(',')
        .map(|token| match token.trim() {
            "+" => Ok(Direction::Benefit),
            "-" => Ok(Direction::Cost),
            other => Err(TableError::InvalidImpact {
                token: other.to_string(),
            }),
        })
        .collect()
}

/// Parses paired weight and impact declarations into criteria.
pub fn parse_criteria(weights: &str, impacts: &str) -> Result<Vec<Criterion>, TableError> {
    let weights = parse_weights(weights)?;
    let impacts = parse_impacts(impacts)?;

    if weights.len() != impacts.len() {
        return Err(TableError::DeclarationMismatch {
            weights: weights.len(),
            impacts: impacts.len(),
        });
    }

    Ok(weights
        .into_iter()
        .zip(impacts)
        .map(|(weight, direction)| Criterion::new(weight, direction))
        .collect())
}
