use crate::error::{MatrixError, Result};

/// Storage interface the echelon and solution modules are written against.
///
/// Indices are zero based. Every checked accessor fails with
/// [`MatrixError::RowOutOfBounds`] / [`MatrixError::ColumnOutOfBounds`]
/// instead of panicking.
pub trait Matrix<T>
where
    Self: Sized + Clone,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn num_rows(&self) -> usize;
    fn num_cols(&self) -> usize;

    fn get(&self, row: usize, col: usize) -> Result<T>;
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()>;
    fn row(&self, row: usize) -> Result<Vec<T>>;
    fn column(&self, col: usize) -> Result<Vec<T>>;

    fn identity(n: usize) -> Self;
    fn transpose(&self) -> Self;

    /// Unchecked access, callers validate the indices first
    fn at(&self, row: usize, col: usize) -> T;

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.num_rows() {
            return Err(MatrixError::RowOutOfBounds {
                row,
                rows: self.num_rows(),
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.num_cols() {
            return Err(MatrixError::ColumnOutOfBounds {
                col,
                cols: self.num_cols(),
            });
        }
        Ok(())
    }
}
