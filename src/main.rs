//! Command-line entry point: rank a CSV evaluation table by TOPSIS.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rank_sherpa::adapters::{parse_criteria, CsvRankingWriter, CsvTableReader};
use rank_sherpa::domain::analysis::{DegeneratePolicy, TopsisRanker};

#[derive(Parser)]
#[command(name = "rank-sherpa")]
#[command(about = "Rank alternatives by closeness to the ideal solution (TOPSIS)")]
#[command(version)]
struct Cli {
    /// CSV evaluation table: one label column, then one numeric column per criterion
    input: PathBuf,

    /// Where to write the ranked CSV output
    output: PathBuf,

    /// Comma-separated criterion weights, e.g. "0.4,0.3,0.3"
    #[arg(short, long, allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated criterion impacts, '+' for benefit and '-' for cost
    #[arg(short, long, allow_hyphen_values = true)]
    impacts: String,

    /// Fail instead of warn when alternatives carry no ranking signal
    #[arg(long)]
    strict: bool,

    /// Suppress the ranking table on stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let matrix = CsvTableReader::read_path(&cli.input)
        .with_context(|| format!("reading decision table from {}", cli.input.display()))?;
    let criteria = parse_criteria(&cli.weights, &cli.impacts)?;

    tracing::info!(
        alternatives = matrix.alternative_count(),
        criteria = matrix.criterion_count(),
        "ranking decision table"
    );

    let policy = if cli.strict {
        DegeneratePolicy::Fail
    } else {
        DegeneratePolicy::Warn
    };
    let ranking = TopsisRanker::rank_with(&matrix, &criteria, policy)?;

    CsvRankingWriter::write_path(&cli.output, &ranking)
        .with_context(|| format!("writing ranking to {}", cli.output.display()))?;

    if !cli.quiet {
        println!("{:<40} {:>10} {:>6}", "alternative", "closeness", "rank");
        for (index, entry) in ranking.entries.iter().enumerate() {
            println!(
                "{:<40} {:>10.6} {:>6}",
                entry.label,
                entry.closeness.value(),
                index + 1
            );
        }
        if let Some(top) = ranking.top() {
            println!("\nRecommended: {} (closeness {})", top.label, top.closeness);
        }
    }

    Ok(())
}
