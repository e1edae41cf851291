//! Command implementations for the `para` binary.
//!
//! Each command returns its result instead of printing, so `main` owns all
//! output and exit codes.

mod analyze;
mod describe;
mod options;
mod run;

pub use analyze::{analyze_program, AnalysisSummary};
pub use describe::describe_program;
pub use options::{parse_binding, parse_run_options, RunOptions, UsageError};
pub use run::{run_program, RunOutcome};
