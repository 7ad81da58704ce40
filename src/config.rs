//! Knobs for the solve pipeline.

/// Number of decimal places the reduced matrix is rounded to.
pub const DEFAULT_DECIMALS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Decimal places kept after elimination. Rounding is half away from zero.
    /// Values above 15 are treated as 15, the most an `f64` scale factor can
    /// carry without the rounding step itself adding error.
    pub decimals: u32,
    /// Reject left-hand-side chunks that do not contain a term instead of
    /// skipping them.
    pub strict_terms: bool,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`SolverConfig::decimals`]; anything above 15 rounds like 15.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_strict_terms(mut self, strict: bool) -> Self {
        self.strict_terms = strict;
        self
    }

    /// Scale factor used by the rounding step, `10^decimals`.
    pub(crate) fn rounding_scale(&self) -> f64 {
        10f64.powi(self.decimals.min(15) as i32)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            strict_terms: false,
        }
    }
}
