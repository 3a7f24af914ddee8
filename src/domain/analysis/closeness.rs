//! Distance & Closeness Ranker.

use super::{IdealSolutions, Matrix};

/// Coefficient given to an alternative whose distances to both ideals are 0,
/// i.e. it is equidistant from best and worst.
pub const DEGENERATE_CLOSENESS: f64 = 0.5;

/// Euclidean distances of every alternative to both ideal points.
#[derive(Debug, Clone, PartialEq)]
pub struct Separation {
    pub to_ideal: Vec<f64>,
    pub to_negative_ideal: Vec<f64>,
}

pub struct ClosenessRanker;

impl ClosenessRanker {
    /// Distance of each weighted row to the positive and negative ideal.
    pub fn separation(weighted: &Matrix, ideals: &IdealSolutions) -> Separation {
        let rows = 0..weighted.rows();
        Separation {
            to_ideal: rows
                .clone()
                .map(|i| euclidean(weighted.row(i), &ideals.positive))
                .collect(),
            to_negative_ideal: rows
                .map(|i| euclidean(weighted.row(i), &ideals.negative))
                .collect(),
        }
    }

    /// `d- / (d+ + d-)` per alternative, [`DEGENERATE_CLOSENESS`] when the
    /// two distances are equal (both 0 included).
    ///
    /// Evaluated as a ratio of the two distances so an infinite distance
    /// still yields a coefficient in `[0, 1]`.
    pub fn closeness(separation: &Separation) -> Vec<f64> {
        separation
            .to_ideal
            .iter()
            .zip(&separation.to_negative_ideal)
            .map(|(&plus, &minus)| coefficient(plus, minus))
            .collect()
    }

    /// Row indices ordered best first.
    ///
    /// Stable: equal coefficients keep the model's alternative order.
    pub fn order(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        order
    }
}

fn coefficient(plus: f64, minus: f64) -> f64 {
    if plus == minus {
        DEGENERATE_CLOSENESS
    } else if minus > plus {
        1.0 / (1.0 + plus / minus)
    } else {
        let ratio = minus / plus;
        ratio / (1.0 + ratio)
    }
}

/// Halved differences keep `v - r` finite; `hypot` avoids squaring overflow.
fn euclidean(row: &[f64], reference: &[f64]) -> f64 {
    let half = row
        .iter()
        .zip(reference)
        .fold(0.0_f64, |acc, (v, r)| acc.hypot(v / 2.0 - r / 2.0));
    half * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_measures_both_ideals() {
        let weighted = Matrix::from_rows(vec![vec![3.0, 4.0], vec![0.0, 0.0]]);
        let ideals = IdealSolutions {
            positive: vec![3.0, 4.0],
            negative: vec![0.0, 0.0],
        };

        let separation = ClosenessRanker::separation(&weighted, &ideals);

        assert_eq!(separation.to_ideal[0], 0.0);
        assert!((separation.to_ideal[1] - 5.0).abs() < 1e-12);
        assert!((separation.to_negative_ideal[0] - 5.0).abs() < 1e-12);
        assert_eq!(separation.to_negative_ideal[1], 0.0);
    }

    #[test]
    fn separation_of_extreme_rows_stays_finite() {
        let weighted = Matrix::from_rows(vec![vec![f64::MAX], vec![-f64::MAX]]);
        let ideals = IdealSolutions {
            positive: vec![f64::MAX],
            negative: vec![-f64::MAX],
        };

        let separation = ClosenessRanker::separation(&weighted, &ideals);

        assert_eq!(separation.to_ideal[0], 0.0);
        assert_eq!(separation.to_negative_ideal[1], 0.0);
        // 2 * MAX does not fit; the distance saturates instead of going NaN.
        assert!(!separation.to_negative_ideal[0].is_nan());
        let scores = ClosenessRanker::closeness(&separation);
        assert_eq!(scores, vec![1.0, 0.0]);
    }

    #[test]
    fn closeness_is_share_of_negative_distance() {
        let separation = Separation {
            to_ideal: vec![0.0, 1.0, 3.0],
            to_negative_ideal: vec![2.0, 1.0, 1.0],
        };

        let scores = ClosenessRanker::closeness(&separation);
        assert_eq!(scores[0], 1.0);
        assert_eq!(scores[1], 0.5);
        assert!((scores[2] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn infinite_distances_still_give_a_coefficient() {
        let separation = Separation {
            to_ideal: vec![0.0, f64::INFINITY, 1.0, f64::INFINITY],
            to_negative_ideal: vec![f64::INFINITY, 0.0, f64::INFINITY, 1.0],
        };

        assert_eq!(ClosenessRanker::closeness(&separation), vec![1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_distance_sum_falls_back_to_half() {
        let separation = Separation {
            to_ideal: vec![0.0],
            to_negative_ideal: vec![0.0],
        };

        let scores = ClosenessRanker::closeness(&separation);
        assert_eq!(scores, vec![DEGENERATE_CLOSENESS]);
        assert!(!scores[0].is_nan());
    }

    #[test]
    fn order_is_descending() {
        assert_eq!(ClosenessRanker::order(&[0.1, 0.9, 0.5]), vec![1, 2, 0]);
    }

    #[test]
    fn order_keeps_model_order_on_ties() {
        assert_eq!(ClosenessRanker::order(&[0.5, 0.7, 0.5, 0.7]), vec![1, 3, 0, 2]);
    }

    #[test]
    fn order_is_total_even_with_nan() {
        let order = ClosenessRanker::order(&[0.2, f64::NAN, 1.0, 0.2]);

        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
        // Positive NaN sorts above every number; ties keep model order.
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn order_of_nothing_is_empty() {
        assert!(ClosenessRanker::order(&[]).is_empty());
    }
}
