use crate::algebra::AlgebraError;
use thiserror::Error;

/// Error type returned by [`LinearSystem`](crate::solver::LinearSystem)
/// construction, row operations and solving.
///
/// An inconsistent system or one with infinitely many solutions is not an
/// error.  Those are reported through [`Solution`](crate::solver::Solution).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearSystemError {
    /// A system needs at least one equation
    #[error("A linear system needs at least one equation")]
    EmptySystem,
    /// An equation does not live in the same dimension as the system
    #[error("Equation {row} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row index outside the system
    #[error("Row index {index} out of range for a system of {len} equations")]
    RowOutOfRange { index: usize, len: usize },
    /// Failure in the underlying decimal arithmetic
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Error type returned by the [`LinearSolver`](crate::solver::LinearSolver)
/// front end.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error(transparent)]
    System(#[from] LinearSystemError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Printing failed: {0}")]
    Io(#[from] std::io::Error),
}
