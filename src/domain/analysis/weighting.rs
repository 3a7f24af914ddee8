//! Weight Applier - scales normalized columns by criterion weight.

use super::Matrix;

pub struct WeightApplier;

impl WeightApplier {
    /// `weighted[i][j] = normalized[i][j] * weights[j]`.
    ///
    /// `weights` must have one entry per column; the index space guarantees it.
    pub fn apply(normalized: &Matrix, weights: &[f64]) -> Matrix {
        assert_eq!(
            normalized.columns(),
            weights.len(),
            "weight vector does not match criterion count"
        );
        normalized.map_cells(|_, column, value| value * weights[column])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_each_column() {
        let normalized = Matrix::from_rows(vec![vec![0.5, 1.0], vec![0.25, 0.0]]);
        let weighted = WeightApplier::apply(&normalized, &[2.0, 0.3]);

        assert_eq!(weighted.get(0, 0), 1.0);
        assert_eq!(weighted.get(1, 0), 0.5);
        assert_eq!(weighted.get(0, 1), 0.3);
        assert_eq!(weighted.get(1, 1), 0.0);
    }

    #[test]
    fn zero_weight_erases_column() {
        let normalized = Matrix::from_rows(vec![vec![0.7], vec![0.1]]);
        let weighted = WeightApplier::apply(&normalized, &[0.0]);
        assert_eq!(weighted.column(0).collect::<Vec<_>>(), vec![0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "weight vector does not match criterion count")]
    fn mismatched_weights_panic() {
        WeightApplier::apply(&Matrix::zeros(2, 2), &[1.0]);
    }
}
