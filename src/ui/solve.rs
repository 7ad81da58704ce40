use crate::config::SolverConfig;
use crate::error::Result;
use crate::format::{pretty_matrix, pretty_solution};
use crate::solver::solve_with;

/// Render the full report for `input`: the reduced matrix followed by the
/// solution, as lines for CLI/examples.
pub fn solve_summary(input: &str, config: &SolverConfig) -> Result<Vec<String>> {
    let solved = solve_with(input, config)?;

    let mut lines = vec!["RREF Matrix:".to_string()];
    lines.extend(pretty_matrix(&solved.matrix).lines().map(str::to_string));
    lines.push("Solution:".to_string());
    lines.extend(pretty_solution(&solved.solution).lines().map(str::to_string));
    for ignored in &solved.ignored {
        lines.push(format!(
            "Ignored {:?} on line {}",
            ignored.token, ignored.line
        ));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_matrix_then_solution() {
        let lines = solve_summary("2x=4", &SolverConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec!["RREF Matrix:", "1 | 2", "Solution:", "{", "  \"x\": 2", "}"]
        );
    }

    #[test]
    fn summary_reports_skipped_chunks() {
        let lines = solve_summary("x+7=3", &SolverConfig::default()).unwrap();
        assert_eq!(lines.last().map(String::as_str), Some("Ignored \"+7\" on line 1"));
    }
}
