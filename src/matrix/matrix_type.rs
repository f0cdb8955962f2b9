use num_traits::{One, Zero};
use std::fmt;

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixType {
    ZeroMatrix,
    ColumnMatrix,
    RowMatrix,
    SquareMatrix,
    DiagonalMatrix,
    IdentityMatrix,
    NotSpecial,
}

impl fmt::Display for MatrixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub fn is_zero_matrix<T: GenElement, M: Matrix<T>>(m: &M) -> bool {
    (0..m.num_rows()).all(|r| (0..m.num_cols()).all(|c| m.at(r, c).is_zero()))
}

pub fn is_column_matrix<T, M: Matrix<T>>(m: &M) -> bool {
    m.num_cols() == 1 && m.num_rows() > 1
}

pub fn is_row_matrix<T, M: Matrix<T>>(m: &M) -> bool {
    m.num_rows() == 1 && m.num_cols() > 1
}

pub fn is_square_matrix<T, M: Matrix<T>>(m: &M) -> bool {
    m.num_rows() == m.num_cols()
}

pub fn is_diagonal_matrix<T: GenElement, M: Matrix<T>>(m: &M) -> bool {
    is_square_matrix(m)
        && (0..m.num_rows())
            .all(|r| (0..m.num_cols()).all(|c| r == c || m.at(r, c).is_zero()))
}

pub fn is_identity<T: GenElement, M: Matrix<T>>(m: &M) -> bool {
    is_diagonal_matrix(m) && (0..m.num_rows()).all(|i| m.at(i, i).is_one())
}

/// First matching type, checked from the most specific shape down
pub fn identify<T: GenElement, M: Matrix<T>>(m: &M) -> MatrixType {
    if is_zero_matrix(m) {
        MatrixType::ZeroMatrix
    } else if is_column_matrix(m) {
        MatrixType::ColumnMatrix
    } else if is_row_matrix(m) {
        MatrixType::RowMatrix
    } else if is_identity(m) {
        MatrixType::IdentityMatrix
    } else if is_diagonal_matrix(m) {
        MatrixType::DiagonalMatrix
    } else if is_square_matrix(m) {
        MatrixType::SquareMatrix
    } else {
        MatrixType::NotSpecial
    }
}

pub fn trace<T: GenElement, M: Matrix<T>>(m: &M) -> Result<T> {
    if !is_square_matrix(m) {
        return Err(MatrixError::Structural(
            "trace only works on square matrices".into(),
        ));
    }
    Ok((0..m.num_rows()).map(|i| m.at(i, i)).sum())
}

/// Scaled copy, the input is left as is
pub fn scale<T: GenElement>(m: &MatrixGen<T>, scalar: T) -> MatrixGen<T> {
    m.map(|cell| cell * scalar.clone())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
