//! Evaluation errors.
//!
//! The taxonomy is closed. Operators and functions only ever produce
//! `ArithmeticError` and `TypeMismatch`; the evaluator adds
//! `UnresolvedReference` and `ParameterCountMismatch`. `DuplicateDefinition`
//! belongs to the store layer that registers references.
//!
//! Build errors through the constructor functions below so that every message
//! is worded in one place.

use para_ir::{BinaryOp, FunctionArity, ReferenceId, UnaryOp, Value};

/// Result of evaluating a formula or applying an operator.
pub type EvalResult = Result<Value, EvaluationError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    /// A reference has no binding in the store.
    #[error("unresolved reference {0}")]
    UnresolvedReference(ReferenceId),

    /// An operator or function hit a domain error.
    #[error("arithmetic error: {0}")]
    ArithmeticError(String),

    /// An operator or function received a value of the wrong kind.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A call's argument count violates the function's declared arity.
    #[error("{function} expects {expected}, got {got}")]
    ParameterCountMismatch {
        function: &'static str,
        expected: FunctionArity,
        got: usize,
    },

    /// A reference was registered twice.
    #[error("duplicate definition of {0}")]
    DuplicateDefinition(ReferenceId),
}

// Store errors

pub fn unresolved_reference(id: ReferenceId) -> EvaluationError {
    EvaluationError::UnresolvedReference(id)
}

pub fn duplicate_definition(id: ReferenceId) -> EvaluationError {
    EvaluationError::DuplicateDefinition(id)
}

// Arithmetic errors

pub fn division_by_zero() -> EvaluationError {
    EvaluationError::ArithmeticError("division by zero".to_string())
}

pub fn non_finite_result(operation: &str) -> EvaluationError {
    EvaluationError::ArithmeticError(format!("{operation} produced a non-finite result"))
}

pub fn domain_error(message: impl Into<String>) -> EvaluationError {
    EvaluationError::ArithmeticError(message.into())
}

// Type errors

pub fn unary_type_mismatch(op: UnaryOp, operand: &Value) -> EvaluationError {
    EvaluationError::TypeMismatch(format!(
        "operator `{}` cannot be applied to {}",
        op.as_symbol(),
        operand.type_name()
    ))
}

pub fn binary_type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvaluationError {
    EvaluationError::TypeMismatch(format!(
        "operator `{}` cannot be applied to {} and {}",
        op.as_symbol(),
        left.type_name(),
        right.type_name()
    ))
}

pub fn wrong_arg_type(function: &str, expected: &str, got: &Value) -> EvaluationError {
    EvaluationError::TypeMismatch(format!(
        "{function} expects {expected}, got {}",
        got.type_name()
    ))
}

// Call errors

pub fn parameter_count_mismatch(
    function: &'static str,
    expected: FunctionArity,
    got: usize,
) -> EvaluationError {
    EvaluationError::ParameterCountMismatch {
        function,
        expected,
        got,
    }
}
