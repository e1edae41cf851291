//! The runtime seen by executing instructions.
//!
//! Runtime faults are a separate channel from [`EvaluationError`]: they are
//! reported to the runtime, not returned. The node that detects one stops;
//! its siblings and ancestors carry on unless the runtime halts.

use para_eval::{DataSet, DataStore, EvaluationError};
use parking_lot::Mutex;
use std::sync::Arc;

/// Executor context for one pass over an instruction tree.
pub trait Runtime {
    /// The current parameter bindings.
    fn data_set(&self) -> &dyn DataStore;

    /// Report a fault detected while executing an instruction.
    fn report_error(&mut self, fault: RuntimeFault);

    /// Whether remaining instructions should be skipped.
    fn is_halted(&self) -> bool {
        false
    }
}

/// Why an evaluated expression could not be used by its instruction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionFailure {
    #[error("{0}")]
    Evaluation(EvaluationError),
    #[error("expected bool, got {type_name}")]
    NotBoolean { type_name: &'static str },
}

/// A fault reported through [`Runtime::report_error`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeFault {
    /// An expression did not produce the value kind its instruction requires.
    #[error("invalid expression: {reason}")]
    InvalidExpression { reason: ExpressionFailure },
}

/// Payload-free fault category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeFaultKind {
    InvalidExpression,
}

impl RuntimeFault {
    pub fn kind(&self) -> RuntimeFaultKind {
        match self {
            RuntimeFault::InvalidExpression { .. } => RuntimeFaultKind::InvalidExpression,
        }
    }
}

/// What [`ExecContext`] does after a fault is reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FaultPolicy {
    /// Record the fault and keep executing the rest of the tree.
    #[default]
    Continue,
    /// Record the fault and skip every instruction not yet started.
    Halt,
}

/// Thread-safe record of reported faults.
#[derive(Debug, Default)]
pub struct FaultLog {
    entries: Mutex<Vec<RuntimeFault>>,
}

impl FaultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, fault: RuntimeFault) {
        self.entries.lock().push(fault);
    }

    /// Copy of every fault recorded so far, in report order.
    pub fn snapshot(&self) -> Vec<RuntimeFault> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Fault log shared between a runtime and its observers.
pub type SharedFaultLog = Arc<FaultLog>;

/// The standard [`Runtime`]: a [`DataSet`] plus a fault log.
#[derive(Debug, Default)]
pub struct ExecContext {
    data: DataSet,
    faults: SharedFaultLog,
    policy: FaultPolicy,
    halted: bool,
}

impl ExecContext {
    pub fn new(data: DataSet) -> Self {
        ExecContext {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record faults into `log` instead of a private one.
    #[must_use]
    pub fn with_fault_log(mut self, log: SharedFaultLog) -> Self {
        self.faults = log;
        self
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    /// Mutable bindings, for re-running the tree after parameters change.
    pub fn data_mut(&mut self) -> &mut DataSet {
        &mut self.data
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    pub fn faults(&self) -> Vec<RuntimeFault> {
        self.faults.snapshot()
    }

    pub fn fault_log(&self) -> SharedFaultLog {
        Arc::clone(&self.faults)
    }

    /// Clear the halt flag and the fault log before another pass.
    pub fn reset(&mut self) {
        self.halted = false;
        self.faults.clear();
    }
}

impl Runtime for ExecContext {
    fn data_set(&self) -> &dyn DataStore {
        &self.data
    }

    fn report_error(&mut self, fault: RuntimeFault) {
        tracing::warn!(%fault, policy = ?self.policy, "runtime fault");
        self.faults.record(fault);
        if self.policy == FaultPolicy::Halt {
            self.halted = true;
        }
    }

    fn is_halted(&self) -> bool {
        self.halted
    }
}
