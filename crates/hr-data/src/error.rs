use hr_core::{HrError, MovePoints, ObjectId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("data parse error: {0}")]
    Parse(String),

    #[error("distance matrix row {row} has {got} columns, expected {expected}")]
    MatrixShape {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("distance matrix has {got} cells, expected {expected}")]
    MatrixSizeMismatch { expected: usize, got: usize },

    #[error("negative distance {value} from {from} to {to}")]
    NegativeDistance {
        from:  ObjectId,
        to:    ObjectId,
        value: MovePoints,
    },

    #[error(transparent)]
    Core(#[from] HrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
