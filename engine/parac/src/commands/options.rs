//! Argument parsing for `para run`.

use para_exec::FaultPolicy;
use para_ir::{ReferenceId, Value};

/// A malformed command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("expected `R<n>=<value>`, got `{0}`")]
    MalformedBinding(String),
    #[error("invalid reference `{0}`; expected `R<n>`")]
    InvalidReference(String),
    #[error("invalid value `{0}`; expected a finite number, `true` or `false`")]
    InvalidValue(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Options for one execution of the demo program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    /// Overrides applied on top of the default parameters, in order.
    pub bindings: Vec<(ReferenceId, Value)>,
    pub policy: FaultPolicy,
}

/// Parse the arguments following `run`.
///
/// Accepts `--set R<n>=<value>` (or `--set=R<n>=<value>`), repeatable, and
/// `--halt-on-fault`.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, UsageError> {
    let mut options = RunOptions::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        if arg == "--set" {
            let binding = args.next().ok_or(UsageError::MissingValue("--set"))?;
            options.bindings.push(parse_binding(binding)?);
        } else if let Some(binding) = arg.strip_prefix("--set=") {
            options.bindings.push(parse_binding(binding)?);
        } else if arg == "--halt-on-fault" {
            options.policy = FaultPolicy::Halt;
        } else {
            return Err(UsageError::UnknownOption(arg.clone()));
        }
    }
    Ok(options)
}

/// Parse `R<n>=<number|true|false>`.
pub fn parse_binding(text: &str) -> Result<(ReferenceId, Value), UsageError> {
    let Some((name, value)) = text.split_once('=') else {
        return Err(UsageError::MalformedBinding(text.to_string()));
    };
    let id = name
        .strip_prefix('R')
        .and_then(|raw| raw.parse::<u32>().ok())
        .map(ReferenceId::new)
        .ok_or_else(|| UsageError::InvalidReference(name.to_string()))?;
    let value = match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Number)
            .ok_or_else(|| UsageError::InvalidValue(value.to_string()))?,
    };
    Ok((id, value))
}
