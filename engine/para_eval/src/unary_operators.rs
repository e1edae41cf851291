//! Unary operator implementations.

use crate::capability::UnaryOperator;
use crate::errors::{unary_type_mismatch, EvalResult};
use para_ir::{UnaryOp, Value};

/// Arithmetic negation of numbers and vectors.
#[derive(Copy, Clone, Debug, Default)]
pub struct Negate;

impl UnaryOperator for Negate {
    fn apply(&self, operand: Value) -> EvalResult {
        match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            Value::Vector { x, y } => Ok(Value::vector(-x, -y)),
            Value::Bool(_) => Err(unary_type_mismatch(UnaryOp::Negate, &operand)),
        }
    }
}

/// Logical negation.
#[derive(Copy, Clone, Debug, Default)]
pub struct Not;

impl UnaryOperator for Not {
    fn apply(&self, operand: Value) -> EvalResult {
        match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            _ => Err(unary_type_mismatch(UnaryOp::Not, &operand)),
        }
    }
}
