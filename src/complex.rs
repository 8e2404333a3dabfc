//! ComplexNumber - the validated `(real, imaginary)` pair and its raw
//! arithmetic.
//!
//! The operator impls carry the standard formulas and nothing else: division
//! here is the plain conjugate formula and does not check for a zero
//! divisor. The zero check is calculator policy, applied before the operator
//! runs.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::value::format_float;

/// A complex number `re + im·i` with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexNumber {
    pub re: f64,
    pub im: f64,
}

impl ComplexNumber {
    pub fn new(re: f64, im: f64) -> Self {
        ComplexNumber { re, im }
    }

    /// Squared magnitude `re² + im²`. The divisor's `abs2` is the
    /// denominator of complex division.
    pub fn abs2(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, rhs: ComplexNumber) -> ComplexNumber {
        ComplexNumber::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for ComplexNumber {
    type Output = ComplexNumber;

    /// Division by the complex conjugate. Unchecked: a zero divisor yields
    /// NaN/Inf components, as plain float division would.
    fn div(self, rhs: ComplexNumber) -> ComplexNumber {
        let denom = rhs.abs2();
        ComplexNumber::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl std::fmt::Display for ComplexNumber {
    /// Sign-aware rendering: `1.0 + 2.0i`, `1.0 - 2.0i`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im < 0.0 {
            write!(f, "{} - {}i", format_float(self.re), format_float(-self.im))
        } else {
            write!(f, "{} + {}i", format_float(self.re), format_float(self.im))
        }
    }
}
