//! String-based helpers for callers that only want text in and text out.

mod solve;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::solver::{self, Solution};

pub use solve::solve_summary;

/// The two values a presentation layer consumes: the reduced matrix and the
/// solution mapping.
pub fn solve(input: &str) -> Result<(Matrix, Solution)> {
    let solved = solver::solve(input)?;
    Ok((solved.matrix, solved.solution))
}
