//! Value - the dynamically typed candidate operand.
//!
//! This module contains:
//! - `Value`: the enum representing every value a caller may hand the
//!   calculator, well-formed or not
//! - `ValueType`: a simplified type tag for Value variants, used by
//!   diagnostics

use serde::{Deserialize, Serialize};

use crate::complex::ComplexNumber;

/// A candidate operand. Callers build these freely; the calculator's
/// validator decides which ones are acceptable complex-number pairs.
///
/// The untagged serde representation lets operands be written as plain JSON
/// literals: `[4, 5]`, `true`, `"not a pair"`, `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value (JSON `null`).
    Nothing,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
    /// A host-native complex scalar. The validator rejects these rather
    /// than unwrapping them; only the pair form is an accepted operand.
    Complex { re: f64, im: f64 },
    /// Ordered sequence, the carrier for `[real, imaginary]` pairs.
    List(Vec<Value>),
}

/// Simplified type tag for `Value` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Nothing,
    Bool,
    Int,
    Float,
    Str,
    Complex,
    List,
}

impl Value {
    /// Get the type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Nothing => ValueType::Nothing,
            Value::Bool(_) => ValueType::Bool,
            Value::I64(_) => ValueType::Int,
            Value::F64(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Complex { .. } => ValueType::Complex,
            Value::List(_) => ValueType::List,
        }
    }

    /// Get the type name of this value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.value_type() {
            ValueType::Nothing => "nothing",
            ValueType::Bool => "boolean",
            ValueType::Int => "integer",
            ValueType::Float => "float",
            ValueType::Str => "string",
            ValueType::Complex => "complex",
            ValueType::List => "list",
        }
    }

    /// Build a `[real, imaginary]` pair operand.
    pub fn pair(re: impl Into<Value>, im: impl Into<Value>) -> Value {
        Value::List(vec![re.into(), im.into()])
    }

    /// Parse a candidate operand from a JSON literal.
    ///
    /// This is construction convenience only; it is not a complex-number
    /// literal syntax (`"1+2i"` is just a string).
    pub fn from_json(src: &str) -> serde_json::Result<Value> {
        serde_json::from_str(src)
    }
}

/// Format a float for diagnostics: whole numbers get a ".0" suffix so they
/// read as floats, not integers.
pub(crate) fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}.0", x as i64)
    } else {
        x.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nothing => write!(f, "nothing"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I64(x) => write!(f, "{}", x),
            Value::F64(x) => write!(f, "{}", format_float(*x)),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Complex { re, im } => write!(f, "{}", ComplexNumber::new(*re, *im)),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Value {
        Value::I64(x)
    }
}

// Unsuffixed integer literals fall back to i32, so `Value::pair(4, 5)`
// needs this impl too.
impl From<i32> for Value {
    fn from(x: i32) -> Value {
        Value::I64(i64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::F64(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}

/// A computed result converts back into the pair form, so it can be fed in
/// as an operand of a later call.
impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Value {
        Value::List(vec![Value::F64(c.re), Value::F64(c.im)])
    }
}
