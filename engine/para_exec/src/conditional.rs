//! The conditional group instruction.

use crate::analyzer::Analyzer;
use crate::instruction::{run_sequence, Instruction, InstructionNode};
use crate::runtime::{ExpressionFailure, Runtime, RuntimeFault};
use crate::stringifier::{Stringifier, UNRENDERABLE};
use para_eval::evaluate;
use para_ir::{Expression, Value};

/// Runs its node's children only when a boolean condition holds.
///
/// | condition result   | effect                                        |
/// |--------------------|-----------------------------------------------|
/// | `Ok(true)`         | children execute in order                     |
/// | `Ok(false)`        | nothing                                       |
/// | `Ok(non-bool)`     | one `InvalidExpression` fault, no children    |
/// | `Err(_)`           | one `InvalidExpression` fault, no children    |
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalGroup {
    condition: Expression,
}

impl ConditionalGroup {
    pub fn new(condition: Expression) -> Self {
        ConditionalGroup { condition }
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }
}

impl Instruction for ConditionalGroup {
    fn evaluate(&self, runtime: &mut dyn Runtime, children: &[InstructionNode]) {
        let reason = match evaluate(&self.condition, runtime.data_set()) {
            Ok(Value::Bool(true)) => {
                tracing::debug!(children = children.len(), "condition holds");
                run_sequence(runtime, children);
                return;
            }
            Ok(Value::Bool(false)) => {
                tracing::debug!(children = children.len(), "condition false; skipping");
                return;
            }
            Ok(other) => ExpressionFailure::NotBoolean {
                type_name: other.type_name(),
            },
            Err(err) => ExpressionFailure::Evaluation(err),
        };
        runtime.report_error(RuntimeFault::InvalidExpression { reason });
    }

    fn analyze(&self, _analyzer: &mut dyn Analyzer) {}

    fn description(&self, stringifier: &dyn Stringifier) -> String {
        let condition = stringifier
            .render(&self.condition)
            .unwrap_or_else(|| UNRENDERABLE.to_string());
        format!("if {condition}:")
    }
}
