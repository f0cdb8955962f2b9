use num_traits::{One, Zero};

use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::cmp::Ord
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::cmp::Ord
        + std::fmt::Debug
{
}

/// Dense matrix, cells stored row after row
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        MatrixGen::from_nested(rows, cols, lines)
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.at(row, col))
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    fn row(&self, row: usize) -> Result<Vec<T>> {
        self.check_row(row)?;
        Ok(self.cells[row * self.cols..(row + 1) * self.cols].to_vec())
    }

    fn column(&self, col: usize) -> Result<Vec<T>> {
        self.check_col(col)?;
        Ok((0..self.rows).map(|r| self.at(r, col)).collect())
    }

    fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T: GenElement> MatrixGen<T> {
    /// All-zero matrix
    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            rows,
            cols,
            cells: (0..(rows * cols)).map(|_| T::zero()).collect(),
        }
    }

    pub fn from_flat(rows: usize, cols: usize, cells: Vec<T>) -> Result<MatrixGen<T>> {
        if cells.len() != rows * cols {
            return Err(MatrixError::Structural(format!(
                "Matrix must contain {} elements. Received {}.",
                rows * cols,
                cells.len()
            )));
        }
        Ok(MatrixGen { rows, cols, cells })
    }

    /// Flattens one level of nesting. Every line must hold exactly `cols` entries.
    pub fn from_nested(rows: usize, cols: usize, lines: Vec<Vec<T>>) -> Result<MatrixGen<T>> {
        if let Some((i, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::Structural(format!(
                "Matrix rows must contain {} elements. Row {} has {}.",
                cols,
                i,
                line.len()
            )));
        }
        MatrixGen::from_flat(rows, cols, lines.into_iter().flatten().collect())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Same matrix without its last column, i.e. the coefficients of an
    /// augmented system
    pub fn coefficient_block(&self) -> Result<MatrixGen<T>> {
        if self.cols == 0 {
            return Err(MatrixError::Structural(
                "A matrix without columns has no coefficient block".into(),
            ));
        }
        let cols = self.cols - 1;
        Ok(MatrixGen {
            rows: self.rows,
            cols,
            cells: (0..self.rows)
                .flat_map(|r| self.row_slice(r)[..cols].iter().cloned())
                .collect(),
        })
    }

    /// Converts every cell, e.g. integers into [`crate::rings::fraction::Fraction`]
    pub fn map<U: GenElement>(&self, f: impl Fn(T) -> U) -> MatrixGen<U> {
        MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().cloned().map(f).collect(),
        }
    }
}

impl<T: GenElement> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.cols == 0 {
            return writeln!(f, "[]");
        }

        let texts: Vec<String> = self.cells.iter().map(|c| c.to_string()).collect();
        let width = texts.iter().map(|t| t.chars().count()).max().unwrap_or(0);
        let dash = "─".repeat(width + 2);

        let border = |left: &str, mid: &str, right: &str| {
            format!("{}{}{}", left, vec![dash.as_str(); self.cols].join(mid), right)
        };

        writeln!(f, "{}", border("┌", "┬", "┐"))?;
        for (i, line) in texts.chunks(self.cols).enumerate() {
            let cells: Vec<String> = line.iter().map(|t| format!(" {:>width$} ", t)).collect();
            writeln!(f, "│{}│", cells.join("│"))?;
            if i + 1 < self.rows {
                writeln!(f, "{}", border("├", "┼", "┤"))?;
            }
        }
        writeln!(f, "{}", border("└", "┴", "┘"))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use num_bigint::BigInt;
    use std::str::FromStr;

    #[test]
    fn test_matrix_generic() {
        let bi = |s: &str| BigInt::parse_bytes(s.as_bytes(), 10).unwrap();

        let a = MatrixGen::<BigInt>::identity(2);
        assert_eq!(
            a.to_list(),
            vec![vec![bi("1"), bi("0")], vec![bi("0"), bi("1")]]
        );

        let b = MatrixGen::<BigInt>::from_list(vec![
            vec![
                bi("100000000000000000000000000000000000000000000000000000000000006"),
                bi("-101"),
            ],
            vec![bi("1"), bi("-1")],
        ])
        .unwrap();
        assert_eq!(b.get(1, 1).unwrap(), bi("-1"));
        assert_eq!(b.column(1).unwrap(), vec![bi("-101"), bi("-1")]);

        let m = MatrixGen::<i64>::from_list(vec![
            vec![1, 2, 5, 77],
            vec![3, 4, 7, 11],
            vec![4, 8, 9, 1],
        ])
        .unwrap();

        assert_eq!(
            m.transpose().to_list(),
            vec![vec![1, 3, 4], vec![2, 4, 8], vec![5, 7, 9], vec![77, 11, 1],]
        );
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.row(2).unwrap(), vec![4, 8, 9, 1]);
        assert_eq!(m.column(3).unwrap(), vec![77, 11, 1]);
        assert_eq!(
            m.coefficient_block().unwrap().to_list(),
            vec![vec![1, 2, 5], vec![3, 4, 7], vec![4, 8, 9]]
        );
    }

    #[test]
    fn test_matrix_construction() {
        let zeros = MatrixGen::<i64>::new(3, 3);
        assert!(zeros.as_slice().iter().all(|c| *c == 0));
        assert_eq!(zeros.num_rows(), 3);
        assert_eq!(zeros.num_cols(), 3);

        let flat = MatrixGen::from_flat(2, 3, vec![1i64, 2, 3, 4, 5, 6]).unwrap();
        let nested = MatrixGen::from_nested(2, 3, vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(flat, nested);

        assert!(matches!(
            MatrixGen::from_flat(2, 3, vec![1i64, 2, 3]),
            Err(MatrixError::Structural(_))
        ));
        assert!(matches!(
            MatrixGen::from_nested(2, 2, vec![vec![1i64, 2], vec![3]]),
            Err(MatrixError::Structural(_))
        ));
        assert!(matches!(
            MatrixGen::from_list(vec![vec![1i64, 2], vec![3]]),
            Err(MatrixError::Structural(_))
        ));
    }

    #[test]
    fn test_matrix_clone_is_independent() {
        let mut a = MatrixGen::from_list(vec![vec![1i64, 2], vec![3, 4]]).unwrap();
        let b = a.clone();
        a.set(0, 0, 9).unwrap();
        assert_eq!(a.get(0, 0).unwrap(), 9);
        assert_eq!(b.get(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_matrix_out_of_bounds() {
        let mut m = MatrixGen::from_list(vec![vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();

        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::RowOutOfBounds { row: 2, rows: 2 })
        );
        assert_eq!(
            m.get(0, 3),
            Err(MatrixError::ColumnOutOfBounds { col: 3, cols: 3 })
        );
        assert!(m.set(2, 0, 1).is_err());
        assert!(m.set(0, 3, 1).is_err());
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
        assert_eq!(
            m.row(5).unwrap_err().to_string(),
            "Row 5 is out of bounds."
        );
        assert_eq!(m.to_list(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_matrix_display() {
        let m = MatrixGen::from_list(vec![vec![1i64, -18], vec![0, 3]]).unwrap();
        let expected = "\
┌─────┬─────┐
│   1 │ -18 │
├─────┼─────┤
│   0 │   3 │
└─────┴─────┘
";
        assert_eq!(format!("{}", m), expected);

        let m = MatrixGen::from_list(vec![vec![Fraction::from_str("3/2").unwrap()]]).unwrap();
        assert_eq!(format!("{}", m), "┌─────┐\n│ 3/2 │\n└─────┘\n");
    }
}
