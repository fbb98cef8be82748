use thiserror::Error;

// Unified error type for monokit

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoError {
    #[error("invalid matrix dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("dimension mismatch in {op}: lhs is {}x{}, rhs is {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("negative exponent {0}")]
    NegativeExponent(i64),
    #[error("ragged rows: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
