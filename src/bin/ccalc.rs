#![deny(clippy::expect_used)]
//! Complex calculator demo driver
//!
//! Runs the reference scenario against the public API with the logging sink
//! installed. Control the diagnostic output with `RUST_LOG`, e.g.:
//!
//!   RUST_LOG=info cargo run --features demo --bin ccalc

use complex_calculator::{ComplexCalculator, Value};

fn main() {
    env_logger::init();

    let calc = ComplexCalculator::new();
    let a = Value::pair(4, 5);
    let b = Value::pair(2, 3);

    println!("a = {}", ComplexCalculator::format_complex(&a));
    println!("b = {}", ComplexCalculator::format_complex(&b));
    println!("a + b = {}", calc.add(&a, &b));
    println!("a - b = {}", calc.subtract(&a, &b));
    println!("a * b = {}", calc.multiply(&a, &b));
    match calc.divide(&a, &b) {
        Ok(result) => println!("a / b = {}", result),
        Err(e) => println!("a / b failed: {}", e),
    }

    // Soft failure: a malformed operand yields the sentinel, not an error.
    let bad = Value::from("not a pair");
    println!("a + \"not a pair\" = {}", calc.add(&a, &bad));

    // Hard failure: the zero divisor propagates.
    let zero = Value::pair(0, 0);
    match calc.divide(&a, &zero) {
        Ok(result) => println!("a / 0 = {}", result),
        Err(e) => println!("a / 0 failed: {}", e),
    }
}
