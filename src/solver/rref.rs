use num_traits::Zero;
use tracing::{debug, instrument, trace};

use crate::config::SolverConfig;
use crate::error::{Result, SolveError};
use crate::matrix::Matrix;

/// Pivot positions chosen during elimination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RrefTrace {
    /// `(row, column)` of every pivot, in the order they were fixed.
    pub pivots: Vec<(usize, usize)>,
    /// Elimination ran out of columns before rows. The matrix is then left
    /// unrounded.
    pub halted_early: bool,
}

impl RrefTrace {
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

pub fn rref(matrix: &mut Matrix) -> Result<RrefTrace> {
    rref_with(matrix, &SolverConfig::default())
}

/// Gauss-Jordan elimination over every column, the augmented one included.
///
/// The pivot for each row is the first row at or below it with a nonzero
/// entry in the current lead column; magnitudes are not compared.
#[instrument(level = "debug", skip_all, fields(rows = matrix.rows(), cols = matrix.cols()))]
pub fn rref_with(matrix: &mut Matrix, config: &SolverConfig) -> Result<RrefTrace> {
    let rows = matrix.rows();
    if rows == 0 {
        return Err(SolveError::EmptyMatrix);
    }
    let cols = matrix.cols();
    let mut report = RrefTrace::default();
    let mut lead = 0;

    for row in 0..rows {
        let Some((pivot_idx, col)) = find_pivot(matrix, row, lead) else {
            debug!(row, "no pivot left; returning matrix unrounded");
            report.halted_early = true;
            return Ok(report);
        };
        lead = col;

        matrix.swap_rows(row, pivot_idx);

        let pivot_value = matrix.get(row, lead);
        for cell in matrix.row_mut(row) {
            *cell /= pivot_value;
        }

        let (before, pivot_row, after) = matrix.split_around_row(row);
        for other in before
            .chunks_exact_mut(cols)
            .chain(after.chunks_exact_mut(cols))
        {
            let factor = other[lead];
            if factor.is_zero() {
                continue;
            }
            for (cell, &p) in other.iter_mut().zip(pivot_row) {
                *cell -= factor * p;
            }
        }

        trace!(row, col = lead, pivot = pivot_value, "pivot fixed");
        report.pivots.push((row, lead));
        lead += 1;
    }

    round_cells(matrix, config.rounding_scale());
    Ok(report)
}

/// First `(row, col)` at or after `(start_row, lead)` holding a nonzero
/// entry, advancing the lead column whenever a column is exhausted.
fn find_pivot(matrix: &Matrix, start_row: usize, mut lead: usize) -> Option<(usize, usize)> {
    while lead < matrix.cols() {
        if let Some(row) = (start_row..matrix.rows()).find(|&r| !matrix.get(r, lead).is_zero()) {
            return Some((row, lead));
        }
        lead += 1;
    }
    None
}

fn round_cells(matrix: &mut Matrix, scale: f64) {
    for cell in matrix.cells_mut() {
        let rounded = (*cell * scale).round() / scale;
        // -0.0 renders as "-0"
        *cell = if rounded.is_zero() { 0.0 } else { rounded };
    }
}
