//! CSV ranking writer adapter.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::domain::analysis::Ranking;

use super::TableError;

/// CSV-backed implementation of ranking output.
pub struct CsvRankingWriter;

impl CsvRankingWriter {
    /// Writes a ranking to a CSV file.
    pub fn write_path(path: impl AsRef<Path>, ranking: &Ranking) -> Result<(), TableError> {
        let file = File::create(path)?;
        Self::write(file, ranking)
    }

    /// Writes a ranking as `alternative,closeness,rank` rows.
    ///
    /// Entries are already sorted, so rank is just the 1-based position.
    pub fn write<W: io::Write>(sink: W, ranking: &Ranking) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(sink);

        csv_writer.write_record(["alternative", "closeness", "rank"])?;
        for (index, entry) in ranking.entries.iter().enumerate() {
            let closeness = format!("{:.6}", entry.closeness.value());
            let rank = (index + 1).to_string();
            csv_writer.write_record([entry.label.as_str(), closeness.as_str(), rank.as_str()])?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}
