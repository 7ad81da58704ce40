//! Dense row-major storage for augmented matrices.

use num_traits::Zero;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![f64::zero(); rows * cols],
        }
    }

    /// Builds a matrix from possibly ragged rows, padding short rows with zeros
    /// up to the longest one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        pad_rows(rows, width)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.idx(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.idx(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = self.idx(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let start_a = a * cols;
        let start_b = b * cols;
        for offset in 0..cols {
            self.data.swap(start_a + offset, start_b + offset);
        }
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.data.iter_mut()
    }

    /// Splits storage around `row` into (rows above, the row, rows below).
    pub(crate) fn split_around_row(&mut self, row: usize) -> (&mut [f64], &[f64], &mut [f64]) {
        let start = row * self.cols;
        let (before, rest) = self.data.split_at_mut(start);
        let (pivot, after) = rest.split_at_mut(self.cols);
        (before, &*pivot, after)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

/// Pads every row to `variable_count + 1` cells (coefficients plus constant).
///
/// The last cell of each raw row is its constant and stays last: zeros go in
/// between the coefficients and the constant. Rows are only ever extended; a
/// row with more coefficients than `variable_count` widens the whole matrix.
pub fn normalize(rows: Vec<Vec<f64>>, variable_count: usize) -> Matrix {
    let coefficient_width = rows
        .iter()
        .map(|row| row.len().saturating_sub(1))
        .max()
        .unwrap_or(0)
        .max(variable_count);

    let augmented = rows
        .into_iter()
        .map(|mut row| {
            let constant = row.pop().unwrap_or_else(f64::zero);
            row.resize(coefficient_width, f64::zero());
            row.push(constant);
            row
        })
        .collect();
    pad_rows(augmented, coefficient_width + 1)
}

fn pad_rows(rows: Vec<Vec<f64>>, width: usize) -> Matrix {
    let mut data = Vec::with_capacity(rows.len() * width);
    let count = rows.len();
    for mut row in rows {
        row.resize(width, f64::zero());
        data.extend(row);
    }
    Matrix {
        rows: count,
        cols: width,
        data,
    }
}
