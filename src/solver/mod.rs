//! Parse → normalize → reduce → extract.

mod rref;
mod solution;

use tracing::debug;

use crate::config::SolverConfig;
use crate::error::Result;
use crate::matrix::{Matrix, normalize};
use crate::parser::{IgnoredToken, parse_equations_with};

pub use rref::{RrefTrace, rref, rref_with};
pub use solution::{Solution, extract_solution};

/// Everything one solve call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Solved {
    pub variables: Vec<String>,
    /// The augmented matrix after elimination.
    pub matrix: Matrix,
    pub solution: Solution,
    pub trace: RrefTrace,
    pub ignored: Vec<IgnoredToken>,
}

/// Solve a system given as one `lhs=constant` equation per line, using the
/// default configuration.
pub fn solve(input: &str) -> Result<Solved> {
    solve_with(input, &SolverConfig::default())
}

pub fn solve_with(input: &str, config: &SolverConfig) -> Result<Solved> {
    let parsed = parse_equations_with(input, config)?;
    let mut matrix = normalize(parsed.rows, parsed.variables.len());
    let trace = rref_with(&mut matrix, config)?;
    let solution = extract_solution(&matrix, &parsed.variables);

    debug!(
        rank = trace.rank(),
        solved = solution.len(),
        variables = parsed.variables.len(),
        "solved linear system"
    );

    Ok(Solved {
        variables: parsed.variables,
        matrix,
        solution,
        trace,
        ignored: parsed.ignored,
    })
}
