//! The `report` instruction used by the demo program.

use para_eval::evaluate;
use para_exec::{
    Analyzer, ExpressionFailure, Instruction, InstructionNode, Runtime, RuntimeFault, Stringifier,
    UNRENDERABLE,
};
use para_ir::Expression;
use parking_lot::Mutex;
use std::sync::Arc;

/// Lines written by [`Report`] instructions, in execution order.
pub type ActionLog = Arc<Mutex<Vec<String>>>;

/// Evaluates an expression and appends `label = value` to an [`ActionLog`].
///
/// A failed evaluation is reported as an `InvalidExpression` fault and
/// nothing is logged. Reports are leaves; any children are ignored.
#[derive(Debug)]
pub struct Report {
    label: String,
    expression: Expression,
    log: ActionLog,
}

impl Report {
    pub fn new(label: impl Into<String>, expression: Expression, log: &ActionLog) -> Self {
        Report {
            label: label.into(),
            expression,
            log: Arc::clone(log),
        }
    }
}

impl Instruction for Report {
    fn evaluate(&self, runtime: &mut dyn Runtime, _children: &[InstructionNode]) {
        match evaluate(&self.expression, runtime.data_set()) {
            Ok(value) => {
                tracing::debug!(label = %self.label, %value, "report");
                self.log.lock().push(format!("{} = {value}", self.label));
            }
            Err(err) => runtime.report_error(RuntimeFault::InvalidExpression {
                reason: ExpressionFailure::Evaluation(err),
            }),
        }
    }

    fn analyze(&self, analyzer: &mut dyn Analyzer) {
        for reference in self.expression.references() {
            analyzer.require(reference);
        }
    }

    fn description(&self, stringifier: &dyn Stringifier) -> String {
        let value = stringifier
            .render(&self.expression)
            .unwrap_or_else(|| UNRENDERABLE.to_string());
        format!("report {} = {value}", self.label)
    }
}
