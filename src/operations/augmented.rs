use num_traits::Zero;
use std::marker::PhantomData;

use crate::error::{MatrixError, Result};
use crate::expression::variables::VariableConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::GenElement;
use crate::operations::echelon_form::{is_echelon_form, is_pivot_column, pivot_columns};
use crate::operations::solution_set::{self, GeneralSolution, SolutionSetType};
use crate::rings::fraction::Fraction;

/// Borrowed view of a matrix as the augmented matrix `[A | b]` of a linear
/// system: the last column holds the constants, every other column is an
/// unknown.
#[derive(Debug, Clone)]
pub struct AugmentedSystem<'a, T, M: Matrix<T>> {
    matrix: &'a M,
    config: VariableConfig,
    _element: PhantomData<T>,
}

impl<'a, T: GenElement, M: Matrix<T>> AugmentedSystem<'a, T, M> {
    pub fn new(matrix: &'a M) -> Result<Self> {
        Self::with_config(matrix, VariableConfig::default())
    }

    pub fn with_config(matrix: &'a M, config: VariableConfig) -> Result<Self> {
        if matrix.num_cols() == 0 {
            return Err(MatrixError::Structural(
                "An augmented matrix needs a constants column".into(),
            ));
        }
        Ok(AugmentedSystem {
            matrix,
            config,
            _element: PhantomData,
        })
    }

    pub fn matrix(&self) -> &M {
        self.matrix
    }

    pub fn config(&self) -> &VariableConfig {
        &self.config
    }

    pub fn num_unknowns(&self) -> usize {
        self.matrix.num_cols() - 1
    }

    pub fn constants_column(&self) -> usize {
        self.num_unknowns()
    }

    /// False for the constants column, which is not a variable
    pub fn is_free_variable(&self, col: usize) -> Result<bool> {
        self.matrix.check_col(col)?;
        if col == self.constants_column() {
            return Ok(false);
        }
        Ok(!is_pivot_column(self.matrix, col)?)
    }

    pub fn is_basic_variable(&self, col: usize) -> Result<bool> {
        self.matrix.check_col(col)?;
        if col == self.constants_column() {
            return Ok(false);
        }
        is_pivot_column(self.matrix, col)
    }

    fn has_zero_coefficient_row(&self) -> bool {
        let n = self.num_unknowns();
        (0..self.matrix.num_rows()).any(|r| (0..n).all(|c| self.matrix.at(r, c).is_zero()))
    }

    /// Counts on the row/column shape: a zero coefficient row or fewer rows
    /// than unknowns means free variables, a pivot in the constants column
    /// means an equation `0 = b` with `b != 0`.
    pub fn solution_set_type(&self) -> SolutionSetType {
        let has_free_variables =
            self.has_zero_coefficient_row() || self.num_unknowns() > self.matrix.num_rows();
        let inconsistent = pivot_columns(self.matrix).contains(&self.constants_column());

        if inconsistent && has_free_variables {
            SolutionSetType::NoSolution
        } else if has_free_variables {
            SolutionSetType::Infinite
        } else {
            SolutionSetType::Unique
        }
    }
}

impl<'a, T, M> AugmentedSystem<'a, T, M>
where
    T: GenElement + Into<Fraction>,
    M: Matrix<T>,
{
    pub fn derive_general_solution(&self) -> Result<GeneralSolution<Fraction>> {
        if !is_echelon_form(self.matrix, false) {
            return Err(MatrixError::not_echelon());
        }
        if self.solution_set_type() == SolutionSetType::NoSolution {
            return Ok(GeneralSolution::NoSolution);
        }
        Ok(solution_set::derive(self))
    }

    /// One line per unknown, `x_i = ...` or `x_i is a free variable`
    pub fn general_solution(&self) -> Result<Vec<String>> {
        Ok(self.derive_general_solution()?.render(&self.config))
    }

    pub fn parametric_form(&self) -> Result<Vec<String>> {
        Ok(self.derive_general_solution()?.parametric(&self.config))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
