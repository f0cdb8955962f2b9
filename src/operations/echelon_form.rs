//! Structural checks on matrices: zero rows/columns, leading entries, pivots,
//! echelon and reduced echelon form.
//!
//! A pivot element is the leading entry (first nonzero entry from the left) of
//! its row. The stricter "only nonzero entry of its column" condition is only
//! enforced by the reduced echelon check.

use itertools::Itertools;
use log::debug;
use num_traits::{One, Zero};

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::GenElement;

fn not_echelon(reason: String) -> MatrixError {
    MatrixError::Precondition(format!("Matrix is not in echelon form: {}", reason))
}

pub fn is_zero_row<T: GenElement, M: Matrix<T>>(m: &M, row: usize) -> Result<bool> {
    m.check_row(row)?;
    Ok((0..m.num_cols()).all(|c| m.at(row, c).is_zero()))
}

pub fn is_non_zero_row<T: GenElement, M: Matrix<T>>(m: &M, row: usize) -> Result<bool> {
    Ok(!is_zero_row(m, row)?)
}

pub fn is_zero_column<T: GenElement, M: Matrix<T>>(m: &M, col: usize) -> Result<bool> {
    m.check_col(col)?;
    Ok((0..m.num_rows()).all(|r| m.at(r, col).is_zero()))
}

pub fn is_non_zero_column<T: GenElement, M: Matrix<T>>(m: &M, col: usize) -> Result<bool> {
    Ok(!is_zero_column(m, col)?)
}

/// Column of the first nonzero entry of `row`, `None` for a zero row
pub fn leading_entry<T: GenElement, M: Matrix<T>>(m: &M, row: usize) -> Result<Option<usize>> {
    m.check_row(row)?;
    Ok((0..m.num_cols()).find(|&c| !m.at(row, c).is_zero()))
}

pub fn is_pivot_element<T: GenElement, M: Matrix<T>>(m: &M, row: usize, col: usize) -> Result<bool> {
    m.check_col(col)?;
    Ok(leading_entry(m, row)? == Some(col))
}

pub fn is_pivot_column<T: GenElement, M: Matrix<T>>(m: &M, col: usize) -> Result<bool> {
    m.check_col(col)?;
    for row in 0..m.num_rows() {
        if leading_entry(m, row)? == Some(col) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Sorted, distinct columns holding a pivot element
pub fn pivot_columns<T: GenElement, M: Matrix<T>>(m: &M) -> Vec<usize> {
    (0..m.num_rows())
        .filter_map(|row| (0..m.num_cols()).find(|&c| !m.at(row, c).is_zero()))
        .sorted()
        .dedup()
        .collect()
}

/// Every column of `m` is an unknown here, see
/// [`crate::operations::augmented::AugmentedSystem`] for systems whose last
/// column holds the constants.
pub fn is_free_variable<T: GenElement, M: Matrix<T>>(m: &M, col: usize) -> Result<bool> {
    Ok(!is_pivot_column(m, col)?)
}

pub fn is_basic_variable<T: GenElement, M: Matrix<T>>(m: &M, col: usize) -> Result<bool> {
    is_pivot_column(m, col)
}

/// Zero rows must form one block at the bottom of the matrix
pub(crate) fn check_zero_rows<T: GenElement, M: Matrix<T>>(m: &M) -> Result<()> {
    let row_is_zero = |r: usize| (0..m.num_cols()).all(|c| m.at(r, c).is_zero());
    let first_zero = match (0..m.num_rows()).find(|&r| row_is_zero(r)) {
        Some(row) => row,
        None => return Ok(()),
    };

    // rows above `first_zero` are non-zero by construction
    for row in first_zero + 1..m.num_rows() {
        if !row_is_zero(row) {
            return Err(not_echelon(format!(
                "row {} is zero but row {} below it is not",
                first_zero, row
            )));
        }
    }
    Ok(())
}

pub(crate) fn check_leading_entries<T: GenElement, M: Matrix<T>>(
    m: &M,
    check_reduced: bool,
) -> Result<()> {
    let mut previous: Option<usize> = None;

    for row in 0..m.num_rows() {
        let col = match leading_entry(m, row)? {
            Some(col) => col,
            None => continue,
        };

        if let Some(prev) = previous {
            if col <= prev {
                return Err(not_echelon(format!(
                    "leading entry of row {} (column {}) is not right of the one above (column {})",
                    row, col, prev
                )));
            }
        }

        if let Some(below) = (row + 1..m.num_rows()).find(|&r| !m.at(r, col).is_zero()) {
            return Err(not_echelon(format!(
                "entry ({}, {}) below the leading entry of row {} is not zero",
                below, col, row
            )));
        }

        if check_reduced {
            if !m.at(row, col).is_one() {
                return Err(not_echelon(format!(
                    "leading entry of row {} is {}, not 1",
                    row,
                    m.at(row, col)
                )));
            }
            if let Some(other) = (0..m.num_rows()).find(|&r| r != row && !m.at(r, col).is_zero()) {
                return Err(not_echelon(format!(
                    "column {} of the leading entry of row {} has another nonzero entry in row {}",
                    col, row, other
                )));
            }
        }

        previous = Some(col);
    }
    Ok(())
}

/// Never fails: a structural violation is logged and reported as `false`
pub fn is_echelon_form<T: GenElement, M: Matrix<T>>(m: &M, check_reduced: bool) -> bool {
    match check_zero_rows(m).and_then(|_| check_leading_entries(m, check_reduced)) {
        Ok(()) => true,
        Err(err) => {
            debug!("{}", err);
            false
        }
    }
}

pub fn is_reduced_echelon_form<T: GenElement, M: Matrix<T>>(m: &M) -> bool {
    is_echelon_form(m, true)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
