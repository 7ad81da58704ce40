//! String-based convenience API for quick experimentation.

pub use crate::config::SolverConfig;
pub use crate::ui::{solve, solve_summary};
