use num_traits::Zero;

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};

/// Elementary row operations, applied in place.
///
/// Row indices are validated before anything is written, so a failing call
/// leaves the matrix untouched.
pub trait RowOps<T> {
    fn interchange_rows(&mut self, row: usize, other: usize) -> Result<()>;
    fn scale_row(&mut self, row: usize, scalar: T) -> Result<()>;
    /// `row += scalar * other`
    fn add_multiple_of_row(&mut self, row: usize, scalar: T, other: usize) -> Result<()>;
}

fn verify_scalar<T: GenElement>(scalar: &T) -> Result<()> {
    if scalar.is_zero() {
        return Err(MatrixError::Arithmetic("Cannot scale a row by 0".into()));
    }
    Ok(())
}

impl<T: GenElement> RowOps<T> for MatrixGen<T> {
    fn interchange_rows(&mut self, row: usize, other: usize) -> Result<()> {
        self.check_row(row)?;
        self.check_row(other)?;
        if row == other {
            return Ok(());
        }

        let cols = self.num_cols();
        let cells = self.cells_mut();
        for k in 0..cols {
            cells.swap(row * cols + k, other * cols + k);
        }
        Ok(())
    }

    fn scale_row(&mut self, row: usize, scalar: T) -> Result<()> {
        verify_scalar(&scalar)?;
        self.check_row(row)?;

        for cell in self.row_slice_mut(row) {
            *cell = cell.clone() * scalar.clone();
        }
        Ok(())
    }

    fn add_multiple_of_row(&mut self, row: usize, scalar: T, other: usize) -> Result<()> {
        verify_scalar(&scalar)?;
        self.check_row(row)?;
        self.check_row(other)?;

        let source = self.row_slice(other).to_vec();
        for (cell, value) in self.row_slice_mut(row).iter_mut().zip(source) {
            *cell = cell.clone() + scalar.clone() * value;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
