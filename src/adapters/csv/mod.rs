//! CSV adapter - Tabular input and output for the ranking domain.
//!
//! - `CsvTableReader` - Evaluation table to `DecisionMatrix`
//! - `CsvRankingWriter` - `Ranking` to output table
//! - Declaration parsing - weight/impact strings to `Criterion` list

mod declaration;
mod error;
mod reader;
mod writer;

pub use declaration::{parse_criteria, parse_impacts, parse_weights};
pub use error::TableError;
pub use reader::CsvTableReader;
pub use writer::CsvRankingWriter;
