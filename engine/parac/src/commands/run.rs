use super::RunOptions;
use crate::demo;
use crate::report::ActionLog;
use para_exec::{ExecContext, RuntimeFault};

/// Actions logged and faults reported by one execution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOutcome {
    pub actions: Vec<String>,
    pub faults: Vec<RuntimeFault>,
}

/// Execute the demo program with `options` applied over the defaults.
#[tracing::instrument(level = "debug", skip_all, fields(overrides = options.bindings.len()))]
pub fn run_program(options: &RunOptions) -> RunOutcome {
    let log = ActionLog::default();
    let tree = demo::program(&log);

    let mut data = demo::default_parameters();
    for &(id, value) in &options.bindings {
        data.set(id, value);
    }
    let mut ctx = ExecContext::new(data).with_policy(options.policy);
    tracing::debug!(
        parameters = ctx.data().len(),
        policy = ?ctx.policy(),
        "executing demo program"
    );
    tree.execute(&mut ctx);

    let actions = std::mem::take(&mut *log.lock());
    RunOutcome {
        actions,
        faults: ctx.faults(),
    }
}
