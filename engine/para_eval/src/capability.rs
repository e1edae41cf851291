//! Operator and function capabilities.
//!
//! Each operator and function is a zero-sized, default-constructible type
//! implementing one of the three traits below. Implementations receive
//! already-evaluated values, never expressions, and never see the store.
//!
//! Expressions only carry kind tags ([`UnaryOp`], [`BinaryOp`],
//! [`FunctionKind`]). The table functions in this module resolve a tag to its
//! implementation with a `match`, so the set stays closed and exhaustive.

use crate::errors::EvalResult;
use crate::functions::{Abs, Clamp, Distance, Length, Max, Min, Sqrt, Sum, VectorOf};
use crate::operators::{
    Add, And, Divide, Equal, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, Multiply,
    NotEqual, Or, Power, Subtract,
};
use crate::unary_operators::{Negate, Not};
use para_ir::{BinaryOp, FunctionArity, FunctionKind, UnaryOp, Value};

/// A prefix operator.
pub trait UnaryOperator: Default {
    fn apply(&self, operand: Value) -> EvalResult;
}

/// An infix operator. Operands arrive in source order.
pub trait BinaryOperator: Default {
    fn apply(&self, left: Value, right: Value) -> EvalResult;
}

/// A named function with a declared arity.
///
/// The arity is an associated constant so it can be checked before any
/// argument is evaluated and without constructing the function.
pub trait Function: Default {
    const NAME: &'static str;
    const ARITY: FunctionArity;

    /// Apply to evaluated arguments. The caller has already checked
    /// `ARITY.accepts(args.len())`.
    fn apply(&self, args: &[Value]) -> EvalResult;
}

/// Apply the unary operator named by `op`.
pub fn apply_unary(op: UnaryOp, operand: Value) -> EvalResult {
    match op {
        UnaryOp::Negate => Negate.apply(operand),
        UnaryOp::Not => Not.apply(operand),
    }
}

/// Apply the binary operator named by `op`.
pub fn apply_binary(op: BinaryOp, left: Value, right: Value) -> EvalResult {
    match op {
        BinaryOp::Add => Add.apply(left, right),
        BinaryOp::Subtract => Subtract.apply(left, right),
        BinaryOp::Multiply => Multiply.apply(left, right),
        BinaryOp::Divide => Divide.apply(left, right),
        BinaryOp::Power => Power.apply(left, right),
        BinaryOp::Equal => Equal.apply(left, right),
        BinaryOp::NotEqual => NotEqual.apply(left, right),
        BinaryOp::LessThan => LessThan.apply(left, right),
        BinaryOp::LessOrEqual => LessOrEqual.apply(left, right),
        BinaryOp::GreaterThan => GreaterThan.apply(left, right),
        BinaryOp::GreaterOrEqual => GreaterOrEqual.apply(left, right),
        BinaryOp::And => And.apply(left, right),
        BinaryOp::Or => Or.apply(left, right),
    }
}

/// Capability table entry for one function kind.
#[derive(Copy, Clone, Debug)]
pub struct FunctionEntry {
    pub name: &'static str,
    pub arity: FunctionArity,
    pub apply: fn(&[Value]) -> EvalResult,
}

fn apply_with<F: Function>(args: &[Value]) -> EvalResult {
    F::default().apply(args)
}

fn entry<F: Function>() -> FunctionEntry {
    FunctionEntry {
        name: F::NAME,
        arity: F::ARITY,
        apply: apply_with::<F>,
    }
}

/// Resolve a function kind to its implementation.
pub fn function_entry(kind: FunctionKind) -> FunctionEntry {
    match kind {
        FunctionKind::Abs => entry::<Abs>(),
        FunctionKind::Sqrt => entry::<Sqrt>(),
        FunctionKind::Min => entry::<Min>(),
        FunctionKind::Max => entry::<Max>(),
        FunctionKind::Sum => entry::<Sum>(),
        FunctionKind::Clamp => entry::<Clamp>(),
        FunctionKind::Vector => entry::<VectorOf>(),
        FunctionKind::Length => entry::<Length>(),
        FunctionKind::Distance => entry::<Distance>(),
    }
}
