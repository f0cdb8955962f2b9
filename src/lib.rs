#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;
pub mod expression {
    pub mod linear;
    pub mod variables;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
    pub mod matrix_type;
    pub mod row_ops;
}
pub mod operations {
    pub mod augmented;
    pub mod echelon_form;
    pub mod solution_set;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

pub use error::{MatrixError, Result};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_gen::MatrixGen;
pub use operations::augmented::AugmentedSystem;
pub use operations::solution_set::{
    get_general_solution, get_parametric_form, get_solution_set_type, SolutionSetType,
};
pub use rings::fraction::Fraction;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_echelon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    Ok(())
}
