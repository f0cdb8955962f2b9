use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::operations::augmented::AugmentedSystem;
use crate::operations::echelon_form;
use crate::rings::fraction::Fraction;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py<V>(value: Result<V>) -> PyResult<V> {
    value.map_err(|error| PyValueError::new_err(error.to_string()))
}

fn row_index(row: i64, rows: usize) -> PyResult<usize> {
    match usize::try_from(row) {
        Ok(row) if row < rows => Ok(row),
        _ => Err(PyValueError::new_err(format!("Row {} is out of bounds.", row))),
    }
}

fn col_index(col: i64, cols: usize) -> PyResult<usize> {
    match usize::try_from(col) {
        Ok(col) if col < cols => Ok(col),
        _ => Err(PyValueError::new_err(format!("Column {} is out of bounds.", col))),
    }
}

/// Rational matrix, cells are read back as `"n"` or `"n/d"` strings
#[derive(Debug, Clone)]
#[pyclass(name = "Matrix")]
pub struct PyMatrix {
    pub inner: MatrixGen<Fraction>,
}

#[pymethods]
impl PyMatrix {
    #[new]
    #[pyo3(signature = (rows, cols, values=None))]
    pub fn new(rows: usize, cols: usize, values: Option<Vec<Vec<i64>>>) -> PyResult<Self> {
        let inner = match values {
            None => MatrixGen::new(rows, cols),
            Some(lines) => to_py(MatrixGen::from_nested(
                rows,
                cols,
                lines
                    .into_iter()
                    .map(|line| line.into_iter().map(Fraction::from).collect())
                    .collect(),
            ))?,
        };
        Ok(PyMatrix { inner })
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.num_rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.num_cols()
    }

    pub fn get(&self, row: i64, col: i64) -> PyResult<String> {
        let row = row_index(row, self.inner.num_rows())?;
        let col = col_index(col, self.inner.num_cols())?;
        Ok(to_py(self.inner.get(row, col))?.to_string())
    }

    pub fn set(&mut self, row: i64, col: i64, value: i64) -> PyResult<()> {
        let row = row_index(row, self.inner.num_rows())?;
        let col = col_index(col, self.inner.num_cols())?;
        to_py(self.inner.set(row, col, Fraction::from(value)))
    }

    pub fn row(&self, row: i64) -> PyResult<Vec<String>> {
        let row = row_index(row, self.inner.num_rows())?;
        Ok(to_py(self.inner.row(row))?.iter().map(|f| f.to_string()).collect())
    }

    pub fn column(&self, col: i64) -> PyResult<Vec<String>> {
        let col = col_index(col, self.inner.num_cols())?;
        Ok(to_py(self.inner.column(col))?.iter().map(|f| f.to_string()).collect())
    }

    #[pyo3(signature = (check_reduced=false))]
    pub fn is_echelon_form(&self, check_reduced: bool) -> bool {
        echelon_form::is_echelon_form(&self.inner, check_reduced)
    }

    pub fn is_reduced_echelon_form(&self) -> bool {
        echelon_form::is_reduced_echelon_form(&self.inner)
    }

    pub fn is_pivot_column(&self, col: i64) -> PyResult<bool> {
        let col = col_index(col, self.inner.num_cols())?;
        to_py(echelon_form::is_pivot_column(&self.inner, col))
    }

    pub fn solution_set_type(&self) -> PyResult<String> {
        Ok(to_py(AugmentedSystem::new(&self.inner))?.solution_set_type().to_string())
    }

    pub fn general_solution(&self) -> PyResult<Vec<String>> {
        to_py(AugmentedSystem::new(&self.inner).and_then(|system| system.general_solution()))
    }

    pub fn parametric_form(&self) -> PyResult<Vec<String>> {
        to_py(AugmentedSystem::new(&self.inner).and_then(|system| system.parametric_form()))
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

