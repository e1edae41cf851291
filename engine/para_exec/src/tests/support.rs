//! Instructions and collaborators used by the tree tests.

use crate::{run_sequence, Analyzer, Instruction, InstructionNode, Runtime, Stringifier};
use para_ir::{Expression, ReferenceId};
use parking_lot::Mutex;
use std::sync::Arc;

/// Labels of the `Record` instructions that ran, in execution order.
pub type ExecutionLog = Arc<Mutex<Vec<&'static str>>>;

pub fn new_log() -> ExecutionLog {
    Arc::default()
}

pub fn entries(log: &ExecutionLog) -> Vec<&'static str> {
    log.lock().clone()
}

/// Appends its label to the log, then runs its children in order.
#[derive(Debug)]
pub struct Record {
    label: &'static str,
    log: ExecutionLog,
}

impl Instruction for Record {
    fn evaluate(&self, runtime: &mut dyn Runtime, children: &[InstructionNode]) {
        self.log.lock().push(self.label);
        run_sequence(runtime, children);
    }

    fn analyze(&self, _analyzer: &mut dyn Analyzer) {}

    fn description(&self, _stringifier: &dyn Stringifier) -> String {
        format!("record {}", self.label)
    }
}

pub fn record(label: &'static str, log: &ExecutionLog) -> InstructionNode {
    InstructionNode::new(Record {
        label,
        log: Arc::clone(log),
    })
}

/// Declares a definition and the references of an expression.
#[derive(Debug)]
pub struct Assigns {
    pub target: ReferenceId,
    pub value: Expression,
}

impl Instruction for Assigns {
    fn evaluate(&self, _runtime: &mut dyn Runtime, _children: &[InstructionNode]) {}

    fn analyze(&self, analyzer: &mut dyn Analyzer) {
        for reference in self.value.references() {
            analyzer.require(reference);
        }
        analyzer.define(self.target);
    }

    fn description(&self, stringifier: &dyn Stringifier) -> String {
        let value = stringifier
            .render(&self.value)
            .unwrap_or_else(|| crate::UNRENDERABLE.to_string());
        format!("{} = {value}", self.target)
    }
}

/// A stringifier that can render nothing.
pub struct Declines;

impl Stringifier for Declines {
    fn render(&self, _expression: &Expression) -> Option<String> {
        None
    }
}
