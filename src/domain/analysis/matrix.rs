//! Dense row-major matrix of alternatives x criteria.

/// Alternatives are rows, criteria are columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix filled with zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    /// Creates a matrix from row vectors. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let columns = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == columns), "ragged rows");
        Self {
            rows: rows.len(),
            columns,
            values: rows.into_iter().flatten().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.columns + column]
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.values[row * self.columns + column] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.columns;
        &self.values[start..start + self.columns]
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |row| self.get(row, column))
    }

    /// Returns a matrix with `f(row, column, value)` applied to every cell.
    pub fn map_cells(&self, f: impl Fn(usize, usize, f64) -> f64) -> Self {
        let mut out = Self::zeros(self.rows, self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                out.set(row, column, f(row, column, self.get(row, column)));
            }
        }
        out
    }
}
