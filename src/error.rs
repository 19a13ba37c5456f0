pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures raised while constructing a CSP instance or a puzzle grid from
/// malformed inputs.
///
/// These are fatal to the attempt and never retried. An unsatisfiable but
/// well-formed problem is *not* an error; search reports it as "no
/// solution".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("variable {0} has no domain")]
    MissingDomain(String),
    #[error("domain of variable {0} is empty")]
    EmptyDomain(String),
    #[error("constraint mentions unknown variable {0}")]
    UnknownVariable(String),
    #[error("puzzle grid is empty")]
    EmptyGrid,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("bad token {token:?} in row {row}")]
    BadToken { token: String, row: usize },
    #[error("digit {0} is outside 1..=9")]
    DigitOutOfRange(u8),
    #[error("{0}x{0} grids are not supported, only 9x9")]
    UnsupportedSize(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),
}
