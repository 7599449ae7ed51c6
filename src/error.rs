use thiserror::Error;

// Unified error type for spektr

#[derive(Error, Debug)]
pub enum SpektrError {
    #[error("matrix must be square, got {0}x{1}")]
    NotSquare(usize, usize),
    #[error("matrix dimension must be at least 1")]
    EmptyMatrix,
    #[error("breakdown at column {0}: zero norm in Gram-Schmidt orthogonalization")]
    SingularColumn(usize),
    #[error("matrix is not symmetric at entry ({0}, {1})")]
    NotSymmetric(usize, usize),
    #[error("matrix parse error: {0}")]
    Parse(String),
}
