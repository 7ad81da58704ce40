use std::collections::BTreeMap;

use crate::matrix::Matrix;

/// Values for the variables that own a leading 1 in the reduced matrix, in
/// column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    entries: Vec<(String, f64)>,
}

impl Solution {
    pub fn get(&self, variable: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == variable)
            .map(|&(_, value)| value)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.get(variable).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Reads the solution off a reduced matrix.
///
/// A row contributes when the first cell exactly equal to `1.0` sits in a
/// coefficient column; the row's last cell becomes that variable's value.
/// Comparison is exact, so a pivot left at `0.999` after rounding drops the
/// variable.
pub fn extract_solution(matrix: &Matrix, variables: &[String]) -> Solution {
    let Some(constant_col) = matrix.cols().checked_sub(1) else {
        return Solution::default();
    };

    let mut by_column = BTreeMap::new();
    for row in matrix.iter_rows() {
        let leading_one = row.iter().position(|&value| value == 1.0);
        if let Some(col) = leading_one.filter(|&col| col < constant_col) {
            by_column.insert(col, row[constant_col]);
        }
    }

    let entries = by_column
        .into_iter()
        .filter_map(|(col, value)| variables.get(col).map(|name| (name.clone(), value)))
        .collect();
    Solution { entries }
}
