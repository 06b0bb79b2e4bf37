//! Adapters - Boundary implementations around the pure domain.
//!
//! Adapters connect the domain to external data:
//! - `csv` - Decision-table input and ranking output

pub mod csv;

pub use csv::{parse_criteria, CsvRankingWriter, CsvTableReader, TableError};
