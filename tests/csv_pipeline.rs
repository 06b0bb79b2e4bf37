//! Integration tests for the CSV ranking pipeline.
//!
//! These tests verify the full table-in, table-out flow:
//! 1. Evaluation tables parse into validated decision matrices
//! 2. Criteria declarations pair with the table columns
//! 3. Rankings land in the output CSV sorted with stable ranks

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rank_sherpa::adapters::{parse_criteria, CsvRankingWriter, CsvTableReader, TableError};
use rank_sherpa::domain::analysis::{DegeneratePolicy, TopsisRanker};
use rank_sherpa::domain::foundation::RankError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const EVALUATION_TABLE: &str = "\
model,silhouette,calinski_harabasz,davies_bouldin
kmeans_k3,0.8,150,0.3
kmeans_k4,0.6,100,0.5
spectral_k3,0.9,200,0.2
";

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("evaluation.csv");
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[test]
fn pipeline_ranks_table_and_writes_sorted_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, EVALUATION_TABLE);
    let output = dir.path().join("ranking.csv");

    let matrix = CsvTableReader::read_path(&input).unwrap();
    let criteria = parse_criteria("0.4,0.3,0.3", "+,+,-").unwrap();
    let ranking = TopsisRanker::rank(&matrix, &criteria).unwrap();
    CsvRankingWriter::write_path(&output, &ranking).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    // spectral_k3 is best on every criterion, kmeans_k4 worst on every one
    assert_eq!(lines[0], "alternative,closeness,rank");
    assert_eq!(lines[1], "spectral_k3,1.000000,1");
    assert!(lines[2].starts_with("kmeans_k3,0.614"));
    assert!(lines[2].ends_with(",2"));
    assert_eq!(lines[3], "kmeans_k4,0.000000,3");
}

#[test]
fn pipeline_surfaces_degenerate_column_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "model,silhouette,dunn\nkmeans_k3,0.8,0\nkmeans_k4,0.6,0\n",
    );

    let matrix = CsvTableReader::read_path(&input).unwrap();
    let criteria = parse_criteria("0.5,0.5", "+,+").unwrap();

    let result = TopsisRanker::rank(&matrix, &criteria);
    match result {
        Err(RankError::DegenerateColumn { criterion }) => assert_eq!(criterion, "dunn"),
        _ => panic!("Expected DegenerateColumn error"),
    }
}

#[test]
fn pipeline_rejects_criteria_declaration_shorter_than_table() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, EVALUATION_TABLE);

    let matrix = CsvTableReader::read_path(&input).unwrap();
    let criteria = parse_criteria("0.5,0.5", "+,-").unwrap();

    let result = TopsisRanker::rank(&matrix, &criteria);
    match result {
        Err(RankError::CriteriaCountMismatch { expected, found }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        _ => panic!("Expected CriteriaCountMismatch error"),
    }
}

#[test]
fn strict_policy_rejects_single_row_table() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "model,silhouette,davies_bouldin\nkmeans_k3,0.8,0.3\n");

    let matrix = CsvTableReader::read_path(&input).unwrap();
    let criteria = parse_criteria("0.5,0.5", "+,-").unwrap();

    let result = TopsisRanker::rank_with(&matrix, &criteria, DegeneratePolicy::Fail);
    match result {
        Err(RankError::DegenerateRanking { labels }) => {
            assert_eq!(labels, vec!["kmeans_k3".to_string()]);
        }
        _ => panic!("Expected DegenerateRanking error"),
    }
}

#[test]
fn reader_reports_line_of_non_numeric_score() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "model,silhouette\nkmeans_k3,0.8\nkmeans_k4,n/a\n",
    );

    let result = CsvTableReader::read_path(&input);
    match result {
        Err(TableError::InvalidScore { line, value, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "n/a");
        }
        _ => panic!("Expected InvalidScore error"),
    }
}

#[test]
fn missing_input_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.csv");

    let result = CsvTableReader::read_path(&missing);
    assert!(matches!(result, Err(TableError::Io(_))));
}
