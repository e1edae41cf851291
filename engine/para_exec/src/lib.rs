//! Para Exec - the instruction tree.
//!
//! A construction history is a tree of [`InstructionNode`]s. Each node pairs
//! an [`Instruction`] payload with its ordered children, and the tree supports
//! three independent traversals:
//!
//! - **execute**: run against a [`Runtime`], which supplies the parameter
//!   store and a side channel for [`RuntimeFault`]s
//! - **analyze**: feed every node to an [`Analyzer`]
//! - **describe**: render one line per node through a [`Stringifier`]
//!
//! Only execution evaluates formulas. Analysis and description work on any
//! tree, whatever the current parameter values.
//!
//! [`ConditionalGroup`] is the control-flow instruction: its node's children
//! run only when its condition evaluates to `true`.

mod analyzer;
mod conditional;
mod instruction;
mod runtime;
mod stringifier;

pub use analyzer::{Analyzer, DependencyAnalyzer};
pub use conditional::ConditionalGroup;
pub use instruction::{run_sequence, Instruction, InstructionNode, InstructionTree};
pub use runtime::{
    ExpressionFailure, ExecContext, FaultLog, FaultPolicy, Runtime, RuntimeFault, RuntimeFaultKind,
    SharedFaultLog,
};
pub use stringifier::{ExpressionPrinter, Stringifier, UNRENDERABLE};

#[cfg(test)]
mod tests;
