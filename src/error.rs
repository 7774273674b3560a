use thiserror::Error;

/// Top-level error type for the threed geometry kernel.
#[derive(Debug, Error, PartialEq)]
pub enum ThreedError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{operation}: unsupported operand of type {found}")]
    TypeMismatch {
        operation: &'static str,
        found: &'static str,
    },

    #[error("undefined operation: {0}")]
    Domain(String),

    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("index {index} is out of range (0, 1 or 2 expected)")]
    IndexOutOfRange { index: usize },
}

/// Errors related to transform operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ThreedError`].
pub type Result<T> = std::result::Result<T, ThreedError>;
