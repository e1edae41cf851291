//! Para IR - data model for parametric formulas.
//!
//! This crate contains the types shared by the evaluator and the instruction
//! tree:
//! - [`Value`]: the runtime values formulas produce and consume
//! - [`ReferenceId`]: opaque keys into an external parameter store
//! - [`UnaryOp`], [`BinaryOp`], [`FunctionKind`]: kind tags naming the
//!   stateless operator and function implementations
//! - [`Expression`]: the owned, immutable formula tree
//! - [`visitor`]: read-only traversal over expressions
//!
//! # Design Philosophy
//!
//! - **Tags, not instances**: composite nodes carry a `Copy` kind tag. Two
//!   nodes use the same operator iff their tags are equal, so structural
//!   equality is a plain derive.
//! - **Owned trees**: children are owned through `Box`/`Vec`, which keeps
//!   every tree finite and acyclic by construction.

mod expr;
mod function;
mod operators;
mod reference;
mod value;
pub mod visitor;

pub use expr::Expression;
pub use function::{FunctionArity, FunctionKind};
pub use operators::{BinaryOp, UnaryOp};
pub use reference::ReferenceId;
pub use value::Value;
