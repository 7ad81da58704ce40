use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("malformed equation on line {line}: {reason}")]
    MalformedEquation { line: usize, reason: String },
    #[error("no equations supplied")]
    EmptyMatrix,
    #[error("unrecognized term {token:?} on line {line}")]
    UnrecognizedTerm { line: usize, token: String },
}

impl SolveError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SolveError::MalformedEquation {
            line,
            reason: reason.into(),
        }
    }
}
