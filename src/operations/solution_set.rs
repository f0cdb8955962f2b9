//! Solution sets of augmented systems already in echelon form.
//!
//! Each basic variable is solved from the row holding its pivot, then every
//! reference to another basic variable is substituted until only free
//! variables remain on the right hand sides.

use log::trace;
use num_traits::Zero;
use std::fmt;

use crate::error::Result;
use crate::expression::linear::LinearExpression;
use crate::expression::variables::VariableConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::GenElement;
use crate::operations::augmented::AugmentedSystem;
use crate::rings::fraction::Fraction;

pub const NO_SOLUTION: &str = "No Solution";
const IS_A_FREE_VAR: &str = "is a free variable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionSetType {
    NoSolution,
    Unique,
    Infinite,
}

impl fmt::Display for SolutionSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SolutionSetType::NoSolution => NO_SOLUTION,
            SolutionSetType::Unique => "Unique Solution",
            SolutionSetType::Infinite => "Infinite Solutions",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolutionLine<T: GenElement> {
    Free,
    Equals(LinearExpression<T>),
}

/// Typed general solution, one line per unknown in column order
#[derive(Debug, Clone, PartialEq)]
pub enum GeneralSolution<T: GenElement> {
    NoSolution,
    Lines(Vec<SolutionLine<T>>),
}

impl<T: GenElement> GeneralSolution<T> {
    /// `x_1 = 6 - 5x_3`, `x_3 is a free variable`, ...
    pub fn render(&self, config: &VariableConfig) -> Vec<String> {
        match self {
            GeneralSolution::NoSolution => vec![NO_SOLUTION.to_owned()],
            GeneralSolution::Lines(lines) => lines
                .iter()
                .enumerate()
                .map(|(var, line)| match line {
                    SolutionLine::Free => format!("{} {}", config.gen(var), IS_A_FREE_VAR),
                    SolutionLine::Equals(expr) => {
                        format!("{} = {}", config.gen(var), expr.render(config))
                    }
                })
                .collect(),
        }
    }

    /// Right hand sides only: the variable name for a free variable
    pub fn parametric(&self, config: &VariableConfig) -> Vec<String> {
        match self {
            GeneralSolution::NoSolution => vec![NO_SOLUTION.to_owned()],
            GeneralSolution::Lines(lines) => lines
                .iter()
                .enumerate()
                .map(|(var, line)| match line {
                    SolutionLine::Free => config.gen(var),
                    SolutionLine::Equals(expr) => expr.render(config),
                })
                .collect(),
        }
    }
}

/// Solves every pivot row for its basic variable, `num_unknowns` slots, `None`
/// for free variables. Rows whose only nonzero entry is the constant are
/// skipped, callers rule those out through the solution set type.
pub(crate) fn solve_pivot_rows<T, M>(
    matrix: &M,
    num_unknowns: usize,
) -> Vec<Option<LinearExpression<Fraction>>>
where
    T: GenElement + Into<Fraction>,
    M: Matrix<T>,
{
    let mut slots: Vec<Option<LinearExpression<Fraction>>> = vec![None; num_unknowns];

    for row in 0..matrix.num_rows() {
        let lead = match (0..num_unknowns).find(|&c| !matrix.at(row, c).is_zero()) {
            Some(col) => col,
            None => continue,
        };

        let pivot: Fraction = matrix.at(row, lead).into();
        let constant: Fraction = matrix.at(row, num_unknowns).into();
        let mut expr = LinearExpression::constant(constant / pivot.clone());

        for col in (0..num_unknowns).filter(|&c| c != lead) {
            let coefficient: Fraction = matrix.at(row, col).into();
            if !coefficient.is_zero() {
                expr = expr + LinearExpression::term(col, -(coefficient / pivot.clone()));
            }
        }
        slots[lead] = Some(expr);
    }
    slots
}

/// Replaces basic variables on every right hand side by their own expressions
/// until nothing changes. Returns the number of rounds that changed something.
///
/// In echelon form a pivot row only references columns right of its pivot, so
/// the references are acyclic and at most `slots.len()` rounds can change
/// anything.
pub(crate) fn substitute_basic_variables(slots: &mut [Option<LinearExpression<Fraction>>]) -> usize {
    let mut rounds = 0;

    while rounds <= slots.len() {
        let mut changed = false;

        for var in 0..slots.len() {
            let value = match &slots[var] {
                Some(value) => value.clone(),
                None => continue,
            };

            for other in (0..slots.len()).filter(|&o| o != var) {
                let next = match &slots[other] {
                    Some(expr) if expr.references(var) => expr.substitute(var, &value),
                    _ => continue,
                };
                slots[other] = Some(next);
                changed = true;
            }
        }

        if !changed {
            break;
        }
        rounds += 1;
    }
    rounds
}

pub(crate) fn derive<T, M>(system: &AugmentedSystem<'_, T, M>) -> GeneralSolution<Fraction>
where
    T: GenElement + Into<Fraction>,
    M: Matrix<T>,
{
    let mut slots = solve_pivot_rows(system.matrix(), system.num_unknowns());
    let rounds = substitute_basic_variables(&mut slots);
    trace!("substitution settled after {} round(s)", rounds);

    GeneralSolution::Lines(
        slots
            .into_iter()
            .map(|slot| slot.map_or(SolutionLine::Free, SolutionLine::Equals))
            .collect(),
    )
}

pub fn get_solution_set_type<T: GenElement, M: Matrix<T>>(matrix: &M) -> Result<SolutionSetType> {
    Ok(AugmentedSystem::new(matrix)?.solution_set_type())
}

pub fn get_general_solution<T, M>(matrix: &M) -> Result<Vec<String>>
where
    T: GenElement + Into<Fraction>,
    M: Matrix<T>,
{
    AugmentedSystem::new(matrix)?.general_solution()
}

pub fn get_parametric_form<T, M>(matrix: &M) -> Result<Vec<String>>
where
    T: GenElement + Into<Fraction>,
    M: Matrix<T>,
{
    AugmentedSystem::new(matrix)?.parametric_form()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use crate::matrix::matrix_gen::MatrixGen;
    use crate::operations::echelon_form::tests::{m, random_echelon};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::str::FromStr;

    fn zero_matrix() -> MatrixGen<i64> {
        MatrixGen::new(2, 3)
    }

    fn two_by_two() -> MatrixGen<i64> {
        // x_1 + 8x_2 = 6
        // x_2 = 3
        m(vec![vec![1, 8, 6], vec![0, 1, 3]])
    }

    fn two_by_four() -> MatrixGen<i64> {
        m(vec![vec![1, 0, 5, 6], vec![0, 1, -3, 4]])
    }

    fn five_by_six() -> MatrixGen<i64> {
        m(vec![
            vec![1, 5, 0, 0, 3, 9],
            vec![0, 0, 1, 0, -2, -7],
            vec![0, 0, 0, 1, 8, 6],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
        ])
    }

    fn has_no_solution() -> MatrixGen<i64> {
        // last row reads 0 = 1
        m(vec![
            vec![1, 2, -1, 4, 8],
            vec![0, 9, 5, 2, -5],
            vec![0, 0, -7, 2, -5],
            vec![0, 0, 0, 0, 1],
        ])
    }

    #[test]
    fn test_solution_set_type() {
        assert_eq!(
            get_solution_set_type(&has_no_solution()).unwrap(),
            SolutionSetType::NoSolution
        );
        assert_eq!(
            get_solution_set_type(&two_by_two()).unwrap(),
            SolutionSetType::Unique
        );
        assert_eq!(
            get_solution_set_type(&zero_matrix()).unwrap(),
            SolutionSetType::Infinite
        );
        assert_eq!(
            get_solution_set_type(&five_by_six()).unwrap(),
            SolutionSetType::Infinite
        );
        assert_eq!(
            get_solution_set_type(&m(vec![
                vec![1, 2, -1, 4, 8],
                vec![0, 9, 5, 2, -5],
                vec![0, 0, -7, 2, -5],
                vec![0, 0, 0, 0, 0],
            ]))
            .unwrap(),
            SolutionSetType::Infinite
        );
        assert_eq!(SolutionSetType::NoSolution.to_string(), "No Solution");
        assert_eq!(SolutionSetType::Unique.to_string(), "Unique Solution");
        assert_eq!(SolutionSetType::Infinite.to_string(), "Infinite Solutions");
    }

    #[test]
    fn test_general_solution() {
        assert_eq!(
            get_general_solution(&two_by_two()).unwrap(),
            vec!["x_1 = -18", "x_2 = 3"]
        );
        assert_eq!(
            get_general_solution(&two_by_four()).unwrap(),
            vec!["x_1 = 6 - 5x_3", "x_2 = 4 + 3x_3", "x_3 is a free variable"]
        );
        assert_eq!(
            get_general_solution(&five_by_six()).unwrap(),
            vec![
                "x_1 = 9 - 5x_2 - 3x_5",
                "x_2 is a free variable",
                "x_3 = -7 + 2x_5",
                "x_4 = 6 - 8x_5",
                "x_5 is a free variable",
            ]
        );
        assert_eq!(
            get_general_solution(&has_no_solution()).unwrap(),
            vec!["No Solution"]
        );
        assert_eq!(
            get_general_solution(&zero_matrix()).unwrap(),
            vec!["x_1 is a free variable", "x_2 is a free variable"]
        );
    }

    #[test]
    fn test_general_solution_chains() {
        // x_3 = 2, x_2 = 1 - x_3, x_1 = 4 - x_2 - x_3
        let chain = m(vec![vec![1, 1, 1, 4], vec![0, 1, 1, 1], vec![0, 0, 1, 2]]);
        assert_eq!(
            get_general_solution(&chain).unwrap(),
            vec!["x_1 = 3", "x_2 = -1", "x_3 = 2"]
        );

        // basic variables depending on each other through a free one
        let through_free = m(vec![vec![1, 2, 1, 3], vec![0, 1, 1, 2]]);
        assert_eq!(
            get_general_solution(&through_free).unwrap(),
            vec!["x_1 = -1 + 1x_3", "x_2 = 2 - 1x_3", "x_3 is a free variable"]
        );
    }

    #[test]
    fn test_general_solution_divides_by_pivot() {
        let scaled = m(vec![vec![2, 4, 6], vec![0, 3, 3]]);
        assert_eq!(
            get_general_solution(&scaled).unwrap(),
            vec!["x_1 = 1", "x_2 = 1"]
        );

        let halves = m(vec![vec![2, 1, 3]]);
        assert_eq!(
            get_general_solution(&halves).unwrap(),
            vec!["x_1 = 3/2 - (1/2)x_2", "x_2 is a free variable"]
        );

        let fr = |s: &str| Fraction::from_str(s).unwrap();
        let fractions = MatrixGen::from_list(vec![vec![fr("1/2"), fr("1/4")]]).unwrap();
        assert_eq!(get_general_solution(&fractions).unwrap(), vec!["x_1 = 1/2"]);
    }

    #[test]
    fn test_general_solution_more_rows_than_unknowns() {
        let tall = m(vec![vec![1, 0, 1], vec![0, 1, 2], vec![0, 0, 0]]);
        assert_eq!(
            get_general_solution(&tall).unwrap(),
            vec!["x_1 = 1", "x_2 = 2"]
        );
    }

    #[test]
    fn test_general_solution_requires_echelon_form() {
        let not_echelon = m(vec![vec![0, 1, 2], vec![1, 0, 3]]);
        assert_eq!(
            get_general_solution(&not_echelon),
            Err(MatrixError::not_echelon())
        );
        assert_eq!(
            get_parametric_form(&not_echelon),
            Err(MatrixError::not_echelon())
        );
    }

    #[test]
    fn test_parametric_form() {
        assert_eq!(
            get_parametric_form(&two_by_two()).unwrap(),
            vec!["-18", "3"]
        );
        assert_eq!(
            get_parametric_form(&two_by_four()).unwrap(),
            vec!["6 - 5x_3", "4 + 3x_3", "x_3"]
        );
        assert_eq!(
            get_parametric_form(&has_no_solution()).unwrap(),
            vec!["No Solution"]
        );
    }

    #[test]
    fn test_substitution_rounds() {
        let mut slots = solve_pivot_rows(&two_by_two(), 2);
        assert_eq!(substitute_basic_variables(&mut slots), 1);
        assert_eq!(slots[0], Some(LinearExpression::constant(Fraction::from(-18))));

        let mut slots = solve_pivot_rows(&two_by_four(), 3);
        assert_eq!(substitute_basic_variables(&mut slots), 0);
        assert_eq!(slots[2], None);
    }

    #[test]
    fn test_random_inconsistent_systems() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let rows = rng.gen_range(1..5);
            let unknowns = rng.gen_range(1..6);
            let top = random_echelon(&mut rng, rows, unknowns + 1, false);

            // keep the non-zero rows and append 0 = 1 below them
            let mut lines: Vec<Vec<i64>> = top
                .to_list()
                .into_iter()
                .filter(|line| line[..unknowns].iter().any(|c| *c != 0))
                .collect();
            let mut contradiction = vec![0; unknowns];
            contradiction.push(1);
            lines.push(contradiction);

            let system = m(lines);
            assert_eq!(
                get_solution_set_type(&system).unwrap(),
                SolutionSetType::NoSolution,
                "{}",
                system
            );
            assert_eq!(get_general_solution(&system).unwrap(), vec!["No Solution"]);
        }
    }

    #[test]
    fn test_random_solutions_cover_every_unknown() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let rows = rng.gen_range(1..5);
            let cols = rng.gen_range(2..7);
            let system = random_echelon(&mut rng, rows, cols, true);

            if get_solution_set_type(&system).unwrap() == SolutionSetType::NoSolution {
                continue;
            }
            let lines = get_general_solution(&system).unwrap();
            assert_eq!(lines.len(), cols - 1, "{}", system);
            assert_eq!(lines, get_general_solution(&system).unwrap());

            for (var, line) in lines.iter().enumerate() {
                let name = format!("x_{}", var + 1);
                assert!(line.starts_with(&format!("{} ", name)), "{}", line);
            }
        }
    }
}
