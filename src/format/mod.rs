//! Plain-text rendering of reduced matrices and solutions.

pub mod matrix;
pub mod solution;

pub use matrix::pretty_matrix;
pub use solution::pretty_solution;

/// Magnitudes outside `[1e-6, 1e21)` switch to exponent form.
const PLAIN_RANGE: std::ops::Range<f64> = 1e-6..1e21;

/// Shortest round-trip form; integral values print without a fraction and
/// `-0` prints as `0`. Very small or very large magnitudes, such as residue
/// left in a matrix whose elimination halted before rounding, print as
/// `1e-17` rather than a long run of zeros.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_finite() && !PLAIN_RANGE.contains(&value.abs()) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn numbers_render_compactly() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(0.333), "0.333");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e-17), "1e-17");
        assert_eq!(format_number(-5.5e-7), "-5.5e-7");
        assert_eq!(format_number(2e21), "2e21");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(123456.0), "123456");
    }
}
