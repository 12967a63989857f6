use thiserror::Error;

/// Error type returned by vector and hyperplane operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A vector must have at least one coordinate
    #[error("The coordinates must be nonempty")]
    EmptyCoordinates,
    /// Operands live in different dimensions
    #[error("Incompatible dimensions: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Operation is only defined in one particular dimension (e.g. cross products)
    #[error("Operation requires dimension {expected}, found {found}")]
    WrongDimension { expected: usize, found: usize },
    /// Operation is undefined for the zero vector
    #[error("Operation is undefined for the zero vector")]
    ZeroVector,
    /// Division by an exact zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit in a decimal
    #[error("Decimal overflow")]
    Overflow,
    /// A floating point input was NaN or infinite
    #[error("Value is not finite")]
    NonFinite,
}
