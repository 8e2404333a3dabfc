//! ComplexCalculator - the four validated arithmetic operations.
//!
//! Every operation validates both operands first (see [`crate::validate`]),
//! then computes with the [`ComplexNumber`] operators. Validation failures
//! are reported as data: the operation logs one error record and returns
//! [`OperationResult::Invalid`], never an `Err`. Division by the zero
//! complex number is the single exception and propagates as
//! [`CalcError::DivisionByZero`].

use log::{error, info};

use crate::complex::ComplexNumber;
use crate::error::{CalcError, CalcResult};
use crate::format;
use crate::validate::validate_operands;
use crate::value::Value;

/// The invalid-result marker string, shared by [`OperationResult`]'s display
/// form and the formatter's soft-failure return.
pub const SENTINEL: &str = "ERROR";

/// Result of an arithmetic operation: a complex number, or the single
/// distinguished invalid marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationResult {
    Valid(ComplexNumber),
    Invalid,
}

impl OperationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, OperationResult::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, OperationResult::Invalid)
    }

    /// Extract the complex number, if any.
    pub fn ok(self) -> Option<ComplexNumber> {
        match self {
            OperationResult::Valid(c) => Some(c),
            OperationResult::Invalid => None,
        }
    }
}

impl std::fmt::Display for OperationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationResult::Valid(c) => write!(f, "{}", c),
            OperationResult::Invalid => write!(f, "{}", SENTINEL),
        }
    }
}

/// Stateless complex-number calculator.
///
/// Holds no fields and mutates nothing, so one instance may be shared
/// freely; every call is independently reentrant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexCalculator;

impl ComplexCalculator {
    pub fn new() -> Self {
        ComplexCalculator
    }

    /// Add two complex-number pairs.
    pub fn add(&self, a: &Value, b: &Value) -> OperationResult {
        match validate_operands(a, b) {
            Ok((x, y)) => {
                let result = x + y;
                info!("add: {} + {} = {}", a, b, result);
                OperationResult::Valid(result)
            }
            Err(e) => {
                error!("add failed on {} and {}: {}", a, b, e);
                OperationResult::Invalid
            }
        }
    }

    /// Subtract two complex-number pairs.
    pub fn subtract(&self, a: &Value, b: &Value) -> OperationResult {
        match validate_operands(a, b) {
            Ok((x, y)) => {
                let result = x - y;
                info!("subtract: {} - {} = {}", a, b, result);
                OperationResult::Valid(result)
            }
            Err(e) => {
                error!("subtract failed on {} and {}: {}", a, b, e);
                OperationResult::Invalid
            }
        }
    }

    /// Multiply two complex-number pairs.
    pub fn multiply(&self, a: &Value, b: &Value) -> OperationResult {
        match validate_operands(a, b) {
            Ok((x, y)) => {
                let result = x * y;
                info!("multiply: {} * {} = {}", a, b, result);
                OperationResult::Valid(result)
            }
            Err(e) => {
                error!("multiply failed on {} and {}: {}", a, b, e);
                OperationResult::Invalid
            }
        }
    }

    /// Divide two complex-number pairs.
    ///
    /// Validation failures are soft, like the other operations:
    /// `Ok(Invalid)`. A divisor with zero squared magnitude is the one hard
    /// failure and returns `Err(CalcError::DivisionByZero)`. Validation
    /// precedes the zero check, so a malformed dividend with a zero divisor
    /// is still a soft failure.
    pub fn divide(&self, a: &Value, b: &Value) -> CalcResult<OperationResult> {
        let (x, y) = match validate_operands(a, b) {
            Ok(pair) => pair,
            Err(e) => {
                error!("divide failed on {} and {}: {}", a, b, e);
                return Ok(OperationResult::Invalid);
            }
        };
        if y.abs2() == 0.0 {
            let e = CalcError::DivisionByZero;
            error!("divide failed on {} and {}: {}", a, b, e);
            return Err(e);
        }
        let result = x / y;
        info!("divide: {} / {} = {}", a, b, result);
        Ok(OperationResult::Valid(result))
    }

    /// Format a complex-number pair with two decimal digits per component.
    ///
    /// See [`format::format_complex`].
    pub fn format_complex(c: &Value) -> String {
        format::format_complex(c)
    }
}
