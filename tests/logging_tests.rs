//! Diagnostic-record tests: every branch of every operation emits exactly
//! one record at the required level. Message text is not load-bearing, but
//! the level and the one-record-per-branch rule are part of the contract.

use log::Level;

use complex_calculator::{format_complex, ComplexCalculator, Value};

mod common;

use common::{capture, count_at_level, take_records};

#[test]
fn test_successful_operations_emit_one_info_record_each() {
    let _guard = capture();
    let calc = ComplexCalculator::new();
    let a = Value::pair(4, 5);
    let b = Value::pair(2, 3);

    calc.add(&a, &b);
    calc.subtract(&a, &b);
    calc.multiply(&a, &b);
    calc.divide(&a, &b).unwrap();

    let records = take_records();
    assert_eq!(records.len(), 4);
    assert_eq!(count_at_level(&records, Level::Info), 4);
    for (record, op) in records.iter().zip(["add", "subtract", "multiply", "divide"]) {
        assert!(
            record.message.starts_with(op),
            "expected a {} record, got {:?}",
            op,
            record
        );
    }
}

#[test]
fn test_success_records_carry_operands_and_result() {
    let _guard = capture();
    let calc = ComplexCalculator::new();
    calc.add(&Value::pair(4, 5), &Value::pair(2, 3));

    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert!(records[0].message.contains("[4, 5]"));
    assert!(records[0].message.contains("[2, 3]"));
    assert!(records[0].message.contains("6.0 + 8.0i"));
}

#[test]
fn test_validation_failures_emit_one_error_record_each() {
    let _guard = capture();
    let calc = ComplexCalculator::new();
    let good = Value::pair(1, 2);
    let bad = Value::pair(true, false);

    calc.add(&bad, &good);
    calc.subtract(&good, &bad);
    calc.multiply(&bad, &good);
    calc.divide(&good, &bad).unwrap();

    let records = take_records();
    assert_eq!(records.len(), 4);
    assert_eq!(count_at_level(&records, Level::Error), 4);
}

#[test]
fn test_error_record_names_the_offending_operands() {
    let _guard = capture();
    let calc = ComplexCalculator::new();
    calc.add(&Value::from("not a pair"), &Value::pair(1, 2));

    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert!(records[0].message.contains("\"not a pair\""));
    assert!(records[0].message.contains("[1, 2]"));
}

#[test]
fn test_division_by_zero_emits_one_error_record_before_propagating() {
    let _guard = capture();
    let calc = ComplexCalculator::new();
    let result = calc.divide(&Value::pair(4, 5), &Value::pair(0, 0));
    assert!(result.is_err());

    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert!(records[0].message.contains("division by zero"));
}

#[test]
fn test_formatter_failure_emits_one_error_record() {
    let _guard = capture();
    assert_eq!(format_complex(&Value::from("not a pair")), "ERROR");

    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
}

#[test]
fn test_formatter_success_emits_no_record() {
    let _guard = capture();
    assert_eq!(format_complex(&Value::pair(1.23, 4.56)), "1.23 + 4.56i");
    assert!(take_records().is_empty());
}
