use super::{LinearSystem, LinearSystemError};
use crate::algebra::*;
use itertools::Itertools;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of a [`LinearSolver`](crate::solver::LinearSolver)
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// System is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// System has exactly one solution.
    Solved,
    /// Some equation reduces to `0 = c` with `c` nonzero.
    Inconsistent,
    /// System has infinitely many solutions.
    InfiniteSolutions,
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Outcome of solving a [`LinearSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The single point satisfying every equation.
    Unique(Vector),
    /// No point satisfies every equation.
    Inconsistent,
    /// The solution set is an affine subspace of positive dimension.
    Infinite(Parametrization),
}

impl Solution {
    pub fn status(&self) -> SolverStatus {
        match self {
            Solution::Unique(_) => SolverStatus::Solved,
            Solution::Inconsistent => SolverStatus::Inconsistent,
            Solution::Infinite(_) => SolverStatus::InfiniteSolutions,
        }
    }

    /// The solution point, if there is exactly one.
    pub fn unique(&self) -> Option<&Vector> {
        match self {
            Solution::Unique(x) => Some(x),
            _ => None,
        }
    }

    /// The parametrized solution set, if there are infinitely many.
    pub fn parametrization(&self) -> Option<&Parametrization> {
        match self {
            Solution::Infinite(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(x) => write!(f, "Solution: {}", x),
            Solution::Inconsistent => write!(f, "No solutions"),
            Solution::Infinite(p) => write!(f, "Infinitely many solutions\n{}", p),
        }
    }
}

/// Solution set of an underdetermined system, written as
/// `basepoint + t_1 * direction_vectors[0] + t_2 * direction_vectors[1] + ...`
/// with one free parameter per free variable.
///
/// Each direction vector has a one at its free variable, zero at every other
/// free variable, and the negated RREF coefficient of that free variable at
/// each pivot variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parametrization {
    /// Indices of the variables that do not lead any row of the RREF.
    pub free_variables: Vec<usize>,
    /// The solution with every free variable set to zero.
    pub basepoint: Vector,
    /// One direction per free variable, in the order of `free_variables`.
    pub direction_vectors: Vec<Vector>,
    /// The reduced row-echelon form the parametrization was read from.
    pub rref: LinearSystem,
}

impl Parametrization {
    /// Dimension of the solution set.
    pub fn dimension(&self) -> usize {
        self.free_variables.len()
    }

    /// The point reached with the free parameters set to `params`.
    pub fn point_at(&self, params: &[Decimal]) -> Result<Vector, LinearSystemError> {
        if params.len() != self.direction_vectors.len() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.direction_vectors.len(),
                found: params.len(),
            }
            .into());
        }
        let mut point = self.basepoint.clone();
        for (&t, direction) in params.iter().zip(self.direction_vectors.iter()) {
            point = point.add(&direction.scale(t)?)?;
        }
        Ok(point)
    }
}

impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Basepoint: {}", self.basepoint)?;
        for (direction, &var) in self.direction_vectors.iter().zip(&self.free_variables) {
            write!(f, "\nDirection (x_{} free): {}", var + 1, direction)?;
        }
        write!(
            f,
            "\nFree variables: {}",
            self.free_variables
                .iter()
                .map(|v| format!("x_{}", v + 1))
                .join(", ")
        )
    }
}
