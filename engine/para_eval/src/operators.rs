//! Binary operator implementations.
//!
//! One zero-sized type per operator. Shared per-kind helpers keep the
//! arithmetic and comparison families consistent.

use crate::capability::BinaryOperator;
use crate::errors::{binary_type_mismatch, division_by_zero, non_finite_result, EvalResult};
use para_ir::{BinaryOp, Value};
use std::cmp::Ordering;

/// Component-wise arithmetic shared by `+` and `-`.
#[inline]
fn additive(op: BinaryOp, left: Value, right: Value, f: fn(f64, f64) -> f64) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        (Value::Vector { x: ax, y: ay }, Value::Vector { x: bx, y: by }) => {
            Ok(Value::vector(f(ax, bx), f(ay, by)))
        }
        _ => Err(binary_type_mismatch(op, &left, &right)),
    }
}

/// Numeric ordering comparison. Comparisons involving NaN are false.
#[inline]
fn ordering(op: BinaryOp, left: Value, right: Value, accept: fn(Ordering) -> bool) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            Ok(Value::Bool(a.partial_cmp(&b).is_some_and(accept)))
        }
        _ => Err(binary_type_mismatch(op, &left, &right)),
    }
}

/// Equality between two values of the same kind.
#[inline]
fn equality(op: BinaryOp, left: Value, right: Value) -> Result<bool, crate::EvaluationError> {
    if std::mem::discriminant(&left) == std::mem::discriminant(&right) {
        Ok(left == right)
    } else {
        Err(binary_type_mismatch(op, &left, &right))
    }
}

#[inline]
fn logical(op: BinaryOp, left: Value, right: Value, f: fn(bool, bool) -> bool) -> EvalResult {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(binary_type_mismatch(op, &left, &right)),
    }
}

// Arithmetic

#[derive(Copy, Clone, Debug, Default)]
pub struct Add;

impl BinaryOperator for Add {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        additive(BinaryOp::Add, left, right, |a, b| a + b)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Subtract;

impl BinaryOperator for Subtract {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        additive(BinaryOp::Subtract, left, right, |a, b| a - b)
    }
}

/// Number product, or scaling of a vector by a number on either side.
#[derive(Copy, Clone, Debug, Default)]
pub struct Multiply;

impl BinaryOperator for Multiply {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            (Value::Vector { x, y }, Value::Number(s)) | (Value::Number(s), Value::Vector { x, y }) => {
                Ok(Value::vector(x * s, y * s))
            }
            _ => Err(binary_type_mismatch(BinaryOp::Multiply, &left, &right)),
        }
    }
}

/// Number quotient, or a vector divided by a number. A zero divisor is an
/// arithmetic error rather than an infinity.
#[derive(Copy, Clone, Debug, Default)]
pub struct Divide;

impl BinaryOperator for Divide {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        match (left, right) {
            (Value::Number(_) | Value::Vector { .. }, Value::Number(d)) if d == 0.0 => {
                Err(division_by_zero())
            }
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            (Value::Vector { x, y }, Value::Number(d)) => Ok(Value::vector(x / d, y / d)),
            _ => Err(binary_type_mismatch(BinaryOp::Divide, &left, &right)),
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Power;

impl BinaryOperator for Power {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        match (left, right) {
            (Value::Number(base), Value::Number(exp)) => {
                let result = base.powf(exp);
                if result.is_finite() {
                    Ok(Value::Number(result))
                } else {
                    Err(non_finite_result("exponentiation"))
                }
            }
            _ => Err(binary_type_mismatch(BinaryOp::Power, &left, &right)),
        }
    }
}

// Comparison

#[derive(Copy, Clone, Debug, Default)]
pub struct Equal;

impl BinaryOperator for Equal {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        equality(BinaryOp::Equal, left, right).map(Value::Bool)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct NotEqual;

impl BinaryOperator for NotEqual {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        equality(BinaryOp::NotEqual, left, right).map(|eq| Value::Bool(!eq))
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct LessThan;

impl BinaryOperator for LessThan {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        ordering(BinaryOp::LessThan, left, right, Ordering::is_lt)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct LessOrEqual;

impl BinaryOperator for LessOrEqual {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        ordering(BinaryOp::LessOrEqual, left, right, Ordering::is_le)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct GreaterThan;

impl BinaryOperator for GreaterThan {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        ordering(BinaryOp::GreaterThan, left, right, Ordering::is_gt)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct GreaterOrEqual;

impl BinaryOperator for GreaterOrEqual {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        ordering(BinaryOp::GreaterOrEqual, left, right, Ordering::is_ge)
    }
}

// Logical
//
// Both operands are evaluated before the operator runs; there is no
// short-circuit at the operator level.

#[derive(Copy, Clone, Debug, Default)]
pub struct And;

impl BinaryOperator for And {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        logical(BinaryOp::And, left, right, |a, b| a && b)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Or;

impl BinaryOperator for Or {
    fn apply(&self, left: Value, right: Value) -> EvalResult {
        logical(BinaryOp::Or, left, right, |a, b| a || b)
    }
}
