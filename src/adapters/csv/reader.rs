//! CSV decision-table reader adapter.
//!
//! Parses an evaluation table (one label column, N numeric metric columns)
//! into a validated `DecisionMatrix`.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::domain::analysis::DecisionMatrix;

use super::TableError;

/// CSV-backed implementation of decision-table input.
pub struct CsvTableReader;

impl CsvTableReader {
    /// Reads a decision matrix from a CSV file.
    pub fn read_path(path: impl AsRef<Path>) -> Result<DecisionMatrix, TableError> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Reads a decision matrix from any CSV source.
    ///
    /// The first header names the label column; every remaining header
    /// names a criterion. Ragged rows are surfaced as shape errors with
    /// the offending row's label.
    pub fn read<R: io::Read>(source: R) -> Result<DecisionMatrix, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = csv_reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(TableError::TooFewColumns {
                found: headers.len(),
            });
        }
        let criterion_names: Vec<String> = headers.iter().skip(1).map(String::from).collect();

        let mut builder = DecisionMatrix::builder().criteria(criterion_names.clone());
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let line = index + 2; // line 1 is the header
            let label = record.get(0).unwrap_or_default().to_string();

            let mut scores = Vec::with_capacity(record.len().saturating_sub(1));
            for (j, field) in record.iter().skip(1).enumerate() {
                let score: f64 = field.parse().map_err(|_| TableError::InvalidScore {
                    line,
                    criterion: criterion_names
                        .get(j)
                        .cloned()
                        .unwrap_or_else(|| format!("column {}", j + 2)),
                    value: field.to_string(),
                })?;
                scores.push(score);
            }
            builder = builder.row(label, scores);
        }

        Ok(builder.build()?)
    }
}
