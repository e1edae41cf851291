//! Tests for binary operator implementations.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::capability::apply_binary;
use crate::EvaluationError;
use para_ir::{BinaryOp, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn number_arithmetic() {
    assert_eq!(apply_binary(BinaryOp::Add, num(2.0), num(3.0)).unwrap(), num(5.0));
    assert_eq!(apply_binary(BinaryOp::Subtract, num(2.0), num(3.0)).unwrap(), num(-1.0));
    assert_eq!(apply_binary(BinaryOp::Multiply, num(2.0), num(3.0)).unwrap(), num(6.0));
    assert_eq!(apply_binary(BinaryOp::Divide, num(3.0), num(2.0)).unwrap(), num(1.5));
    assert_eq!(apply_binary(BinaryOp::Power, num(2.0), num(10.0)).unwrap(), num(1024.0));
}

#[test]
fn vector_arithmetic() {
    let a = Value::vector(1.0, 2.0);
    let b = Value::vector(3.0, 5.0);
    assert_eq!(apply_binary(BinaryOp::Add, a, b).unwrap(), Value::vector(4.0, 7.0));
    assert_eq!(apply_binary(BinaryOp::Subtract, b, a).unwrap(), Value::vector(2.0, 3.0));
    assert_eq!(apply_binary(BinaryOp::Multiply, a, num(2.0)).unwrap(), Value::vector(2.0, 4.0));
    assert_eq!(apply_binary(BinaryOp::Multiply, num(2.0), a).unwrap(), Value::vector(2.0, 4.0));
    assert_eq!(apply_binary(BinaryOp::Divide, b, num(2.0)).unwrap(), Value::vector(1.5, 2.5));
}

#[test]
fn division_by_zero_is_arithmetic_error() {
    for left in [num(1.0), Value::vector(1.0, 1.0)] {
        assert_eq!(
            apply_binary(BinaryOp::Divide, left, num(0.0)).unwrap_err(),
            EvaluationError::ArithmeticError("division by zero".to_string())
        );
    }
}

#[test]
fn non_finite_power_is_arithmetic_error() {
    assert!(matches!(
        apply_binary(BinaryOp::Power, num(-8.0), num(0.5)),
        Err(EvaluationError::ArithmeticError(_))
    ));
    assert!(matches!(
        apply_binary(BinaryOp::Power, num(10.0), num(400.0)),
        Err(EvaluationError::ArithmeticError(_))
    ));
}

#[test]
fn comparisons() {
    assert_eq!(apply_binary(BinaryOp::GreaterThan, num(5.0), num(0.0)).unwrap(), Value::Bool(true));
    assert_eq!(apply_binary(BinaryOp::GreaterThan, num(0.0), num(0.0)).unwrap(), Value::Bool(false));
    assert_eq!(apply_binary(BinaryOp::GreaterOrEqual, num(0.0), num(0.0)).unwrap(), Value::Bool(true));
    assert_eq!(apply_binary(BinaryOp::LessThan, num(-1.0), num(0.0)).unwrap(), Value::Bool(true));
    assert_eq!(apply_binary(BinaryOp::LessOrEqual, num(1.0), num(0.0)).unwrap(), Value::Bool(false));
}

#[test]
fn nan_comparisons_are_false() {
    let nan = num(f64::NAN);
    for op in [
        BinaryOp::LessThan,
        BinaryOp::LessOrEqual,
        BinaryOp::GreaterThan,
        BinaryOp::GreaterOrEqual,
    ] {
        assert_eq!(apply_binary(op, nan, num(1.0)).unwrap(), Value::Bool(false));
    }
}

#[test]
fn equality_within_a_kind() {
    assert_eq!(apply_binary(BinaryOp::Equal, num(1.0), num(1.0)).unwrap(), Value::Bool(true));
    assert_eq!(
        apply_binary(BinaryOp::Equal, Value::vector(1.0, 2.0), Value::vector(1.0, 2.0)).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        apply_binary(BinaryOp::NotEqual, Value::Bool(true), Value::Bool(false)).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn equality_across_kinds_is_type_mismatch() {
    assert!(matches!(
        apply_binary(BinaryOp::Equal, num(1.0), Value::Bool(true)),
        Err(EvaluationError::TypeMismatch(_))
    ));
}

#[test]
fn logical_operators() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(apply_binary(BinaryOp::And, t, f).unwrap(), f);
    assert_eq!(apply_binary(BinaryOp::And, t, t).unwrap(), t);
    assert_eq!(apply_binary(BinaryOp::Or, f, t).unwrap(), t);
    assert_eq!(apply_binary(BinaryOp::Or, f, f).unwrap(), f);
}

#[test]
fn type_mismatches() {
    let cases = [
        (BinaryOp::Add, num(1.0), Value::vector(1.0, 1.0)),
        (BinaryOp::Multiply, Value::vector(1.0, 1.0), Value::vector(1.0, 1.0)),
        (BinaryOp::Divide, num(1.0), Value::vector(1.0, 1.0)),
        (BinaryOp::LessThan, Value::Bool(true), Value::Bool(false)),
        (BinaryOp::And, num(1.0), Value::Bool(true)),
    ];
    for (op, left, right) in cases {
        assert!(
            matches!(apply_binary(op, left, right), Err(EvaluationError::TypeMismatch(_))),
            "{op:?} on {left} and {right}"
        );
    }
}
