use crate::matrix::Matrix;

use super::format_number;

/// One line per row: coefficients separated by spaces, then `|` and the
/// constant.
pub fn pretty_matrix(matrix: &Matrix) -> String {
    matrix
        .iter_rows()
        .map(pretty_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn pretty_row(row: &[f64]) -> String {
    let Some((constant, coefficients)) = row.split_last() else {
        return String::new();
    };
    let coefficients: Vec<String> = coefficients.iter().copied().map(format_number).collect();
    format!("{} | {}", coefficients.join(" "), format_number(*constant))
}
