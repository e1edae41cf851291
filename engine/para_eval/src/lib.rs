//! Para Eval - formula evaluator.
//!
//! Reduces an [`Expression`](para_ir::Expression) to a [`Value`] against a
//! [`DataStore`] holding the current parameter bindings.
//!
//! # Architecture
//!
//! - [`evaluate`]: the recursive evaluator, one case per expression variant
//! - [`capability`]: the unary operator, binary operator and function traits,
//!   and the table resolving kind tags to their stateless implementations
//! - [`DataSet`]: the in-memory store
//! - [`errors`]: the closed [`EvaluationError`] taxonomy and its constructors
//!
//! Evaluation errors are data. They are returned through [`EvalResult`] and
//! propagated unchanged; nothing in this crate panics on malformed formulas.

pub mod capability;
pub mod errors;
mod evaluator;
mod functions;
mod operators;
mod store;
mod unary_operators;

pub use capability::{
    apply_binary, apply_unary, function_entry, BinaryOperator, Function, FunctionEntry,
    UnaryOperator,
};
pub use errors::{EvalResult, EvaluationError};
pub use evaluator::evaluate;
pub use functions::{Abs, Clamp, Distance, Length, Max, Min, Sqrt, Sum, VectorOf};
pub use operators::{
    Add, And, Divide, Equal, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, Multiply,
    NotEqual, Or, Power, Subtract,
};
pub use store::{DataSet, DataStore};
pub use unary_operators::{Negate, Not};

pub use para_ir::Value;

#[cfg(test)]
mod tests;
