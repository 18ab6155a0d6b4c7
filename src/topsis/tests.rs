use super::*;
use crate::criteria::{CriteriaMatrix, Impact, ImpactVector, WeightVector};

const TOLERANCE: f64 = 1e-9;

fn single_benefit(values: &[f64]) -> (CriteriaMatrix, WeightVector, ImpactVector) {
    (
        CriteriaMatrix::from_column(values).unwrap(),
        WeightVector::new(vec![1.0]),
        ImpactVector::repeat(Impact::Benefit, 1),
    )
}

fn ranks_of(ranking: &[RankedRow]) -> Vec<usize> {
    ranking.iter().map(|r| r.rank).collect()
}

fn assert_permutation(ranking: &[RankedRow]) {
    let mut ranks = ranks_of(ranking);
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=ranking.len()).collect::<Vec<_>>());
    for (i, row) in ranking.iter().enumerate() {
        assert_eq!(row.row_index, i);
    }
}

#[test]
fn test_five_model_similarity_ranking() {
    let (matrix, weights, impacts) = single_benefit(&[0.95, 0.80, 0.92, 0.60, 0.85]);

    let ranking = rank(&matrix, &weights, &impacts).unwrap();

    // A=1, B=4, C=2, D=5, E=3
    assert_eq!(ranks_of(&ranking), vec![1, 4, 2, 5, 3]);
    assert_permutation(&ranking);
}

#[test]
fn test_single_column_scores_are_min_max_scaled() {
    let (matrix, weights, impacts) = single_benefit(&[0.95, 0.80, 0.92, 0.60, 0.85]);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    let expected: Vec<f64> = [0.95, 0.80, 0.92, 0.60, 0.85]
        .iter()
        .map(|v| (v - 0.60) / (0.95 - 0.60))
        .collect();
    for (score, expected) in report.scores.iter().zip(expected) {
        assert!((score - expected).abs() < TOLERANCE, "{score} vs {expected}");
    }
    assert_eq!(report.order(), vec![0, 2, 4, 1, 3]);
    assert!(!report.is_degenerate());
}

#[test]
fn test_mixed_benefit_cost_scores() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![0.9, 100.0], vec![0.5, 50.0]]).unwrap();
    let weights = WeightVector::new(vec![0.5, 0.5]);
    let impacts = ImpactVector::new(vec![Impact::Benefit, Impact::Cost]);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    // Each row is ideal on one column and anti-ideal on the other, so every distance is a
    // single weighted column gap.
    let benefit_gap = 0.5 * (0.9 - 0.5) / (0.9f64 * 0.9 + 0.5 * 0.5).sqrt();
    let cost_gap = 0.5 * (100.0 - 50.0) / (100.0f64 * 100.0 + 50.0 * 50.0).sqrt();

    assert!((report.distance_to_ideal[0] - cost_gap).abs() < TOLERANCE);
    assert!((report.distance_to_anti_ideal[0] - benefit_gap).abs() < TOLERANCE);
    assert!((report.distance_to_ideal[1] - benefit_gap).abs() < TOLERANCE);
    assert!((report.distance_to_anti_ideal[1] - cost_gap).abs() < TOLERANCE);

    let expected_first = benefit_gap / (benefit_gap + cost_gap);
    let expected_second = cost_gap / (cost_gap + benefit_gap);
    assert!((report.scores[0] - expected_first).abs() < TOLERANCE);
    assert!((report.scores[1] - expected_second).abs() < TOLERANCE);
    assert!((report.scores[0] - 0.464_881_364).abs() < 1e-6);

    assert_eq!(report.ranks(), vec![2, 1]);
}

#[test]
fn test_reference_points_follow_impacts() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![3.0, 4.0], vec![4.0, 3.0]]).unwrap();
    let weights = WeightVector::new(vec![1.0, 1.0]);
    let impacts = ImpactVector::new(vec![Impact::Benefit, Impact::Cost]);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    assert!((report.ideal[0] - 0.8).abs() < TOLERANCE);
    assert!((report.anti_ideal[0] - 0.6).abs() < TOLERANCE);
    assert!((report.ideal[1] - 0.6).abs() < TOLERANCE);
    assert!((report.anti_ideal[1] - 0.8).abs() < TOLERANCE);
    assert!((report.normalized.get(0, 0) - 0.6).abs() < TOLERANCE);
    assert_eq!(report.ranks(), vec![2, 1]);
}

#[test]
fn test_weights_scale_columns() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![3.0, 4.0], vec![4.0, 3.0]]).unwrap();
    let weights = WeightVector::new(vec![0.25, 2.0]);
    let impacts = ImpactVector::repeat(Impact::Benefit, 2);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    assert!((report.weighted.get(0, 0) - 0.15).abs() < TOLERANCE);
    assert!((report.weighted.get(0, 1) - 1.6).abs() < TOLERANCE);
    // Column 1 dominates, where row 0 is better.
    assert_eq!(report.ranks(), vec![1, 2]);
}

#[test]
fn test_monotonic_single_benefit() {
    let values = [0.31, -0.2, 0.77, 0.5, 0.05, 0.99, -0.7];
    let (matrix, weights, impacts) = single_benefit(&values);

    let ranking = rank(&matrix, &weights, &impacts).unwrap();

    for i in 0..values.len() {
        for k in 0..values.len() {
            if values[i] > values[k] {
                assert!(ranking[i].rank < ranking[k].rank, "{i} vs {k}");
            }
        }
    }
    assert_permutation(&ranking);
}

#[test]
fn test_uniform_rescaling_keeps_order() {
    let base = [0.42, 0.13, 0.88, 0.57];
    let scaled: Vec<f64> = base.iter().map(|v| v * 37.5).collect();

    let (m1, w1, i1) = single_benefit(&base);
    let (m2, w2, i2) = single_benefit(&scaled);

    let r1 = rank(&m1, &w1, &i1).unwrap();
    let r2 = rank(&m2, &w2, &i2).unwrap();

    assert_eq!(ranks_of(&r1), ranks_of(&r2));
    for (a, b) in r1.iter().zip(&r2) {
        assert!((a.score - b.score).abs() < TOLERANCE);
    }
}

#[test]
fn test_cost_equals_negated_benefit() {
    let rows = vec![
        vec![0.9, 12.0, 3.0],
        vec![0.4, 8.0, 1.0],
        vec![0.7, 15.0, 2.5],
        vec![0.2, 9.0, 4.0],
    ];
    let negated: Vec<Vec<f64>> = rows
        .iter()
        .map(|r| r.iter().map(|v| -v).collect())
        .collect();
    let weights = WeightVector::new(vec![0.5, 0.3, 0.2]);

    let cost = rank(
        &CriteriaMatrix::from_rows(rows).unwrap(),
        &weights,
        &ImpactVector::repeat(Impact::Cost, 3),
    )
    .unwrap();
    let benefit = rank(
        &CriteriaMatrix::from_rows(negated).unwrap(),
        &weights,
        &ImpactVector::repeat(Impact::Benefit, 3),
    )
    .unwrap();

    assert_eq!(ranks_of(&cost), ranks_of(&benefit));
    for (a, b) in cost.iter().zip(&benefit) {
        assert!((a.score - b.score).abs() < TOLERANCE);
    }
}

#[test]
fn test_identical_rows_are_degenerate() {
    let (matrix, weights, impacts) = single_benefit(&[5.0, 5.0, 5.0]);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    assert_eq!(report.scores, vec![DEGENERATE_SCORE; 3]);
    assert_eq!(report.degenerate_rows, vec![0, 1, 2]);
    assert_eq!(report.ranks(), vec![1, 2, 3]);
}

#[test]
fn test_equal_scores_keep_row_order() {
    let (matrix, weights, impacts) = single_benefit(&[0.5, 0.9, 0.5, 0.1, 0.9]);

    let ranking = rank(&matrix, &weights, &impacts).unwrap();

    assert_eq!(ranks_of(&ranking), vec![3, 1, 4, 5, 2]);
    assert_permutation(&ranking);
}

#[test]
fn test_single_row() {
    let (matrix, weights, impacts) = single_benefit(&[0.42]);

    let ranking = rank(&matrix, &weights, &impacts).unwrap();

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].rank, 1);
    assert_eq!(ranking[0].score, DEGENERATE_SCORE);
}

#[test]
fn test_zero_column_rejected() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![0.9, 0.0], vec![0.4, 0.0]]).unwrap();
    let weights = WeightVector::new(vec![1.0, 1.0]);
    let impacts = ImpactVector::repeat(Impact::Benefit, 2);

    let err = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap_err();

    assert_eq!(err, ValidationError::ZeroColumn { column: 1 });
}

#[test]
fn test_huge_values_do_not_overflow_norm() {
    let (matrix, weights, impacts) = single_benefit(&[1e200, 1e199]);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    assert!(!report.is_degenerate());
    assert!((report.scores[0] - 1.0).abs() < TOLERANCE);
    assert!(report.scores[1].abs() < TOLERANCE);
    assert_eq!(ranks_of(&report.into_ranking()), vec![1, 2]);

    let (matrix, weights, impacts) = single_benefit(&[1e199, 1e200]);
    let ranking = rank(&matrix, &weights, &impacts).unwrap();
    assert_eq!(ranks_of(&ranking), vec![2, 1]);
}

#[test]
fn test_tiny_values_are_not_a_zero_column() {
    let (matrix, weights, impacts) = single_benefit(&[1e-200, 5e-201]);

    let report = TopsisRanker::new()
        .evaluate(&matrix, &weights, &impacts)
        .unwrap();

    assert!(!report.is_degenerate());
    assert!((report.scores[0] - 1.0).abs() < TOLERANCE);
    assert!(report.scores[1].abs() < TOLERANCE);
    assert_eq!(ranks_of(&report.into_ranking()), vec![1, 2]);
}

#[test]
fn test_length_mismatch_rejected() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![0.9, 1.0], vec![0.4, 2.0]]).unwrap();

    let err = rank(
        &matrix,
        &WeightVector::new(vec![1.0]),
        &ImpactVector::repeat(Impact::Benefit, 2),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::LengthMismatch {
            what: "weights",
            expected: 2,
            actual: 1
        }
    );

    let err = rank(
        &matrix,
        &WeightVector::uniform(2),
        &ImpactVector::repeat(Impact::Benefit, 3),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::LengthMismatch {
            what: "impacts",
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_weight_validation() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![0.9, 1.0], vec![0.4, 2.0]]).unwrap();
    let impacts = ImpactVector::repeat(Impact::Benefit, 2);

    assert_eq!(
        rank(&matrix, &WeightVector::new(vec![0.0, 0.0]), &impacts),
        Err(ValidationError::AllWeightsZero)
    );
    assert_eq!(
        rank(&matrix, &WeightVector::new(vec![1.0, -0.5]), &impacts),
        Err(ValidationError::NegativeWeight {
            column: 1,
            value: -0.5
        })
    );
    assert_eq!(
        rank(&matrix, &WeightVector::new(vec![f64::NAN, 1.0]), &impacts),
        Err(ValidationError::NonFiniteWeight { column: 0 })
    );
}

#[test]
fn test_zero_weight_column_is_allowed() {
    let matrix = CriteriaMatrix::from_rows(vec![vec![0.9, 1.0], vec![0.4, 2.0]]).unwrap();

    let ranking = rank(
        &matrix,
        &WeightVector::new(vec![1.0, 0.0]),
        &ImpactVector::repeat(Impact::Benefit, 2),
    )
    .unwrap();

    assert_eq!(ranks_of(&ranking), vec![1, 2]);
}

#[test]
fn test_error_messages_carry_context() {
    let msg = ValidationError::ZeroColumn { column: 3 }.to_string();
    assert!(msg.contains("column 3"));

    let msg = ValidationError::LengthMismatch {
        what: "impacts",
        expected: 2,
        actual: 5,
    }
    .to_string();
    assert!(msg.contains("impacts"));
    assert!(msg.contains('5'));
}
