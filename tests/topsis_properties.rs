//! Property-based tests for the TOPSIS ranker.
//!
//! Verifies the invariants the ranking must hold for arbitrary valid
//! inputs: closeness stays in [0, 1], ranking is deterministic, scaling
//! a column never changes scores, and a dominant row always wins.

use proptest::prelude::*;

use rank_sherpa::domain::analysis::{Criterion, DecisionMatrix, Ranking, TopsisRanker};

/// Generate a positive score table: rows x cols, values bounded away
/// from zero so no column can be degenerate.
fn arb_score_table() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..5).prop_flat_map(|cols| {
        prop::collection::vec(prop::collection::vec(0.1f64..1000.0, cols), 2..8)
    })
}

/// Generate a criterion per column with a valid positive weight.
fn arb_criteria(cols: usize) -> impl Strategy<Value = Vec<Criterion>> {
    prop::collection::vec(
        (0.1f64..10.0, any::<bool>()).prop_map(|(weight, is_benefit)| {
            if is_benefit {
                Criterion::benefit(weight)
            } else {
                Criterion::cost(weight)
            }
        }),
        cols..=cols,
    )
}

/// Generate a matching (table, criteria) pair.
fn arb_ranking_input() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<Criterion>)> {
    arb_score_table().prop_flat_map(|table| {
        let cols = table[0].len();
        (Just(table), arb_criteria(cols))
    })
}

fn build_matrix(table: &[Vec<f64>]) -> DecisionMatrix {
    let cols = table[0].len();
    let names: Vec<String> = (0..cols).map(|j| format!("metric_{}", j)).collect();
    let mut builder = DecisionMatrix::builder().criteria(names);
    for (i, scores) in table.iter().enumerate() {
        builder = builder.row(format!("alt_{}", i), scores.clone());
    }
    builder.build().unwrap()
}

fn closeness_of(ranking: &Ranking, label: &str) -> f64 {
    ranking
        .entries
        .iter()
        .find(|e| e.label == label)
        .map(|e| e.closeness.value())
        .unwrap()
}

proptest! {
    /// Every closeness score lands in the unit interval.
    #[test]
    fn closeness_stays_in_unit_range((table, criteria) in arb_ranking_input()) {
        let matrix = build_matrix(&table);
        let ranking = TopsisRanker::rank(&matrix, &criteria).unwrap();

        for entry in &ranking.entries {
            prop_assert!(entry.closeness.value() >= 0.0);
            prop_assert!(entry.closeness.value() <= 1.0);
        }
    }

    /// Ranking the same input twice yields the same output.
    #[test]
    fn ranking_is_deterministic((table, criteria) in arb_ranking_input()) {
        let matrix = build_matrix(&table);

        let first = TopsisRanker::rank(&matrix, &criteria).unwrap();
        let second = TopsisRanker::rank(&matrix, &criteria).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Multiplying one column by a positive constant cancels out in
    /// normalization, so every alternative keeps its closeness score.
    #[test]
    fn scaling_a_column_preserves_closeness(
        (table, criteria) in arb_ranking_input(),
        factor in 1.0f64..100.0,
    ) {
        let matrix = build_matrix(&table);

        let mut scaled_table = table.clone();
        for row in &mut scaled_table {
            row[0] *= factor;
        }
        let scaled_matrix = build_matrix(&scaled_table);

        let original = TopsisRanker::rank(&matrix, &criteria).unwrap();
        let rescaled = TopsisRanker::rank(&scaled_matrix, &criteria).unwrap();

        for entry in &original.entries {
            let after = closeness_of(&rescaled, &entry.label);
            prop_assert!((entry.closeness.value() - after).abs() < 1e-9);
        }
    }

    /// A row that beats every other row on every benefit column ranks
    /// first and coincides with the ideal-best solution.
    #[test]
    fn dominant_row_ranks_first_with_full_closeness(
        table in arb_score_table(),
        weight in 0.1f64..10.0,
    ) {
        let cols = table[0].len();
        let criteria = vec![Criterion::benefit(weight); cols];

        let mut dominant = vec![0.0; cols];
        for j in 0..cols {
            let max = table.iter().map(|row| row[j]).fold(f64::NEG_INFINITY, f64::max);
            dominant[j] = max * 2.0;
        }

        let mut augmented = table.clone();
        augmented.push(dominant);
        let matrix = build_matrix(&augmented);
        let dominant_label = format!("alt_{}", augmented.len() - 1);

        let ranking = TopsisRanker::rank(&matrix, &criteria).unwrap();

        let top = ranking.top().unwrap();
        prop_assert_eq!(&top.label, &dominant_label);
        prop_assert!((top.closeness.value() - 1.0).abs() < 1e-12);
    }
}
