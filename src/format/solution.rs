use crate::solver::Solution;

use super::format_number;

/// Renders a solution as a two-space indented object, one `"name": value`
/// pair per line in column order.
pub fn pretty_solution(solution: &Solution) -> String {
    if solution.is_empty() {
        return "{}".to_string();
    }
    let body: Vec<String> = solution
        .iter()
        .map(|(name, value)| format!("  {name:?}: {}", format_number(value)))
        .collect();
    format!("{{\n{}\n}}", body.join(",\n"))
}
