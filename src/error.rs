//! Error types shared by the matrix, echelon and solution modules

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Invalid shape or content when building a matrix
    #[error("{0}")]
    Structural(String),

    #[error("Row {row} is out of bounds.")]
    RowOutOfBounds { row: usize, rows: usize },

    #[error("Column {col} is out of bounds.")]
    ColumnOutOfBounds { col: usize, cols: usize },

    /// The operation needs the matrix in (reduced) echelon form
    #[error("{0}")]
    Precondition(String),

    #[error("{0}")]
    Arithmetic(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    pub fn not_echelon() -> Self {
        MatrixError::Precondition("The matrix is not in echelon form".into())
    }
}
