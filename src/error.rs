use thiserror::Error;

/// Errors a query against a rope can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RopeError {
    #[error("offset {index} is out of range for a rope of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("line {line} is out of range for a rope with {count} lines")]
    LineOutOfRange { line: usize, count: usize },
}

pub type RopeResult<T> = Result<T, RopeError>;
