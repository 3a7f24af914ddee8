//! Decision Matrix Normalizer - vector (L2) normalization per criterion.

use super::Matrix;

/// Normalization functions.
pub struct DecisionMatrixNormalizer;

impl DecisionMatrixNormalizer {
    /// Divides every cell by the Euclidean norm of its column.
    ///
    /// Columns are scaled by their largest magnitude first, so the norm
    /// never overflows and every normalized cell lies in `[-1, 1]`.
    ///
    /// # Edge Cases
    /// - All-zero column: norm is 0, every entry of that column becomes 0.0
    /// - No alternatives: returns an empty matrix
    pub fn normalize(matrix: &Matrix) -> Matrix {
        let scales: Vec<ColumnScale> = (0..matrix.columns())
            .map(|column| ColumnScale::of(&matrix.column(column).collect::<Vec<_>>()))
            .collect();
        matrix.map_cells(|_, column, value| scales[column].apply(value))
    }
}

/// Largest magnitude of a column and the norm of the column divided by it.
#[derive(Debug, Clone, Copy)]
struct ColumnScale {
    max_abs: f64,
    scaled_norm: f64,
}

impl ColumnScale {
    fn of(values: &[f64]) -> Self {
        let max_abs = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let scaled_norm = if max_abs == 0.0 {
            0.0
        } else {
            values.iter().fold(0.0_f64, |acc, v| acc.hypot(v / max_abs))
        };
        Self {
            max_abs,
            scaled_norm,
        }
    }

    fn apply(&self, value: f64) -> f64 {
        if self.scaled_norm == 0.0 {
            0.0
        } else {
            (value / self.max_abs) / self.scaled_norm
        }
    }
}
