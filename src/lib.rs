//! Validated complex-number arithmetic on dynamically typed operands.
//!
//! The core of this crate is [`ComplexCalculator`]: four arithmetic
//! operations (add, subtract, multiply, divide) over complex numbers given
//! as two-element [`Value`] pairs, plus a fixed-two-decimal display
//! formatter. Operands are validated for shape (a pair) and element type
//! (integer or float, booleans excluded) before any arithmetic runs.
//!
//! Two failure channels coexist by design:
//! - malformed operands produce the [`OperationResult::Invalid`] sentinel
//!   (the formatter returns the [`SENTINEL`] string), never an `Err`;
//! - division by the zero complex number is the one hard failure and
//!   propagates as [`CalcError::DivisionByZero`].
//!
//! Every operation emits a diagnostic record through the `log` facade:
//! info on success, error on any failure branch. The library never installs
//! a logger; executables do that once per process.

// Library code reports through the `log` facade, never the console.
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod calculator;
pub mod complex;
pub mod error;
pub mod format;
pub mod validate;
pub mod value;

pub use calculator::{ComplexCalculator, OperationResult, SENTINEL};
pub use complex::ComplexNumber;
pub use error::{CalcError, CalcResult};
pub use format::format_complex;
pub use value::{Value, ValueType};
