use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("block length must be positive")]
    InvalidBlockLength,
    #[error("block length mismatch: expected {expected}, got {got}")]
    BlockLengthMismatch { expected: usize, got: usize },
    #[error("{op}: dimension mismatch: A {a:?}, B {b:?}, C {c:?}")]
    DimensionMismatch {
        op: &'static str,
        a: (usize, usize),
        b: (usize, usize),
        c: (usize, usize),
    },
    #[error(
        "view rows {row0}..{row1}, cols {col0}..{col1} is not aligned to block length {block_length}"
    )]
    MisalignedView {
        row0: usize,
        row1: usize,
        col0: usize,
        col1: usize,
        block_length: usize,
    },
    #[error(
        "view rows {row0}..{row1}, cols {col0}..{col1} out of bounds for {num_rows}x{num_cols} matrix"
    )]
    ViewOutOfBounds {
        row0: usize,
        row1: usize,
        col0: usize,
        col1: usize,
        num_rows: usize,
        num_cols: usize,
    },
    #[error("data length mismatch: expected {expected}, got {got}")]
    DataLength { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, BlockError>;
