//! Solve systems of linear equations written as text by reducing their
//! augmented matrix to row-reduced echelon form.

pub mod config;
pub mod error;
pub mod format;
pub mod matrix;
pub mod parser;
pub mod prelude;
pub mod solver;
mod ui;

pub use config::SolverConfig;
pub use error::{Result, SolveError};
pub use format::{format_number, pretty_matrix, pretty_solution};
pub use matrix::{Matrix, normalize};
pub use parser::{IgnoredToken, ParsedSystem, parse_equations, parse_equations_with};
pub use solver::{
    RrefTrace, Solution, Solved, extract_solution, rref, rref_with, solve, solve_with,
};
