//! The shared validation contract, applied identically before add,
//! subtract, multiply and divide.
//!
//! Checks run in phases: both operands' shapes first (is it a list, does it
//! have exactly two elements), then the four elements in order
//! `a[0], a[1], b[0], b[1]`. A pair with a bad element alongside a non-pair
//! operand is therefore a shape error, not a type error.

use crate::complex::ComplexNumber;
use crate::error::{CalcError, CalcResult};
use crate::value::Value;

/// Extract the numeric value of a pair element, if it has an accepted type.
///
/// Only `I64` and `F64` qualify. `Bool` is explicitly not numeric here, and
/// a native `Complex` element is rejected, never unwrapped.
fn numeric_element(v: &Value) -> Option<f64> {
    match v {
        Value::I64(x) => Some(*x as f64),
        Value::F64(x) => Some(*x),
        _ => None,
    }
}

/// Validate a candidate operand pair, yielding the two complex numbers.
pub(crate) fn validate_operands(
    a: &Value,
    b: &Value,
) -> CalcResult<(ComplexNumber, ComplexNumber)> {
    let xs = match a {
        Value::List(xs) => xs,
        other => {
            return Err(CalcError::shape(format!(
                "left operand must be a pair, got {}",
                other.type_name()
            )))
        }
    };
    let ys = match b {
        Value::List(ys) => ys,
        other => {
            return Err(CalcError::shape(format!(
                "right operand must be a pair, got {}",
                other.type_name()
            )))
        }
    };
    if xs.len() != 2 {
        return Err(CalcError::shape(format!(
            "left operand must have exactly two elements, got {}",
            xs.len()
        )));
    }
    if ys.len() != 2 {
        return Err(CalcError::shape(format!(
            "right operand must have exactly two elements, got {}",
            ys.len()
        )));
    }

    let mut parts = [0.0_f64; 4];
    for (i, elem) in xs.iter().chain(ys.iter()).enumerate() {
        parts[i] = numeric_element(elem).ok_or_else(|| {
            CalcError::element_type(format!(
                "element {} must be an integer or float, got {}",
                i,
                elem.type_name()
            ))
        })?;
    }

    Ok((
        ComplexNumber::new(parts[0], parts[1]),
        ComplexNumber::new(parts[2], parts[3]),
    ))
}
