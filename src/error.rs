//! Calculator error types

use thiserror::Error;

/// Calculator error type.
///
/// `Shape` and `Type` are the validation failures; at the calculator's
/// public boundary they are swallowed into the `Invalid` sentinel after
/// logging. `DivisionByZero` is the one failure that propagates as an `Err`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Operand is not a two-element pair
    #[error("shape error: {0}")]
    Shape(String),

    /// A pair element is not an accepted numeric type
    #[error("type error: {0}")]
    Type(String),

    /// Divisor has zero squared magnitude
    #[error("division by zero: divisor has zero squared magnitude")]
    DivisionByZero,
}

impl CalcError {
    /// Create a shape error
    pub fn shape(message: impl Into<String>) -> Self {
        CalcError::Shape(message.into())
    }

    /// Create an element type error
    pub fn element_type(message: impl Into<String>) -> Self {
        CalcError::Type(message.into())
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
