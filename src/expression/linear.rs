use crate::expression::variables::VariableConfig;
use crate::matrix::matrix_gen::GenElement;
use itertools::{EitherOrBoth, Itertools};
use std::fmt;
use std::ops;

/// `constant + Σ coefficient * x_var`
///
/// Terms are kept sorted by variable and never hold a zero coefficient, so
/// two equal expressions always have the same representation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearExpression<T: GenElement> {
    pub constant: T,
    terms: Vec<(usize, T)>,
}

impl<T: GenElement> LinearExpression<T> {
    pub fn constant(value: T) -> Self {
        LinearExpression {
            constant: value,
            terms: vec![],
        }
    }

    pub fn term(var: usize, coefficient: T) -> Self {
        LinearExpression {
            constant: T::zero(),
            terms: if coefficient.is_zero() {
                vec![]
            } else {
                vec![(var, coefficient)]
            },
        }
    }

    pub fn var(var: usize) -> Self {
        Self::term(var, T::one())
    }

    pub fn terms(&self) -> &[(usize, T)] {
        &self.terms
    }

    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn coefficient(&self, var: usize) -> Option<&T> {
        self.terms
            .binary_search_by_key(&var, |(v, _)| *v)
            .ok()
            .map(|i| &self.terms[i].1)
    }

    pub fn references(&self, var: usize) -> bool {
        self.coefficient(var).is_some()
    }

    /// Replaces `x_var` by `value`, folding constants and merging like terms
    pub fn substitute(&self, var: usize, value: &LinearExpression<T>) -> LinearExpression<T> {
        match self.coefficient(var) {
            None => self.clone(),
            Some(coefficient) => {
                let coefficient = coefficient.clone();
                let without = LinearExpression {
                    constant: self.constant.clone(),
                    terms: self
                        .terms
                        .iter()
                        .filter(|(v, _)| *v != var)
                        .cloned()
                        .collect(),
                };
                without + value.clone() * coefficient
            }
        }
    }

    fn merge_terms(
        lhs: Vec<(usize, T)>,
        rhs: Vec<(usize, T)>,
        coefficient_operator: fn(T, T) -> T,
        rhs_alone: fn(T) -> T,
    ) -> Vec<(usize, T)> {
        lhs.into_iter()
            .merge_join_by(rhs, |a, b| a.0.cmp(&b.0))
            .map(|pair| match pair {
                EitherOrBoth::Both((var, a), (_, b)) => (var, coefficient_operator(a, b)),
                EitherOrBoth::Left(term) => term,
                EitherOrBoth::Right((var, b)) => (var, rhs_alone(b)),
            })
            .filter(|(_, c)| !c.is_zero())
            .collect()
    }

    /// Right hand side text, e.g. `6 - 5x_3 + (1/2)x_4`
    pub fn render(&self, config: &VariableConfig) -> String {
        std::iter::once(format!("{}", self.constant))
            .chain(self.terms.iter().map(|(var, coefficient)| {
                let (op, magnitude) = if *coefficient < T::zero() {
                    ("-", T::zero() - coefficient.clone())
                } else {
                    ("+", coefficient.clone())
                };
                let magnitude = magnitude.to_string();
                if magnitude.chars().all(|c| c.is_ascii_digit()) {
                    format!("{} {}{}", op, magnitude, config.gen(*var))
                } else {
                    format!("{} ({}){}", op, magnitude, config.gen(*var))
                }
            }))
            .join(" ")
    }
}

impl<T: GenElement> fmt::Display for LinearExpression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&VariableConfig::default()))
    }
}

impl<T: GenElement> ops::Add<LinearExpression<T>> for LinearExpression<T> {
    type Output = LinearExpression<T>;

    fn add(self, rhs: LinearExpression<T>) -> LinearExpression<T> {
        LinearExpression {
            constant: self.constant + rhs.constant,
            terms: Self::merge_terms(self.terms, rhs.terms, |a, b| a + b, |b| b),
        }
    }
}

impl<T: GenElement> ops::Sub<LinearExpression<T>> for LinearExpression<T> {
    type Output = LinearExpression<T>;

    fn sub(self, rhs: LinearExpression<T>) -> LinearExpression<T> {
        LinearExpression {
            constant: self.constant - rhs.constant,
            terms: Self::merge_terms(self.terms, rhs.terms, |a, b| a - b, |b| T::zero() - b),
        }
    }
}

impl<T: GenElement> ops::Add<T> for LinearExpression<T> {
    type Output = LinearExpression<T>;

    fn add(self, rhs: T) -> LinearExpression<T> {
        LinearExpression {
            constant: self.constant + rhs,
            terms: self.terms,
        }
    }
}

impl<T: GenElement> ops::Mul<T> for LinearExpression<T> {
    type Output = LinearExpression<T>;

    fn mul(self, rhs: T) -> LinearExpression<T> {
        LinearExpression {
            constant: self.constant * rhs.clone(),
            terms: self
                .terms
                .into_iter()
                .map(|(var, c)| (var, c * rhs.clone()))
                .filter(|(_, c)| !c.is_zero())
                .collect(),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
