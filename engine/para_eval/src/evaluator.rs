//! The recursive formula evaluator.

use crate::capability::{apply_binary, apply_unary, function_entry};
use crate::errors::{parameter_count_mismatch, unresolved_reference, EvalResult};
use crate::store::DataStore;
use para_ir::{Expression, Value};
use para_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

/// Evaluate `expression` against the bindings in `store`.
///
/// Evaluation is strict and left-to-right. The first error encountered is
/// returned unchanged and nothing after it is evaluated:
/// - a failing left operand means the right operand is never evaluated;
/// - a call whose argument count violates the function's arity fails before
///   any argument is evaluated;
/// - a failing argument stops evaluation of the remaining arguments.
///
/// The evaluator keeps no state between calls; the same tree may be evaluated
/// again against a different store.
#[tracing::instrument(level = "trace", skip(store))]
pub fn evaluate(expression: &Expression, store: &dyn DataStore) -> EvalResult {
    eval_expr(expression, store)
}

fn eval_expr(expression: &Expression, store: &dyn DataStore) -> EvalResult {
    ensure_sufficient_stack(|| match expression {
        Expression::Constant(value) | Expression::NamedConstant { value, .. } => Ok(*value),
        Expression::Reference(id) => store.lookup(*id).ok_or_else(|| {
            tracing::debug!(reference = %id, "reference has no binding");
            unresolved_reference(*id)
        }),
        Expression::Unary { op, operand } => {
            let value = eval_expr(operand, store)?;
            apply_unary(*op, value)
        }
        Expression::Binary { op, left, right } => {
            let left = eval_expr(left, store)?;
            let right = eval_expr(right, store)?;
            apply_binary(*op, left, right)
        }
        Expression::Call { function, args } => {
            let entry = function_entry(*function);
            if !entry.arity.accepts(args.len()) {
                return Err(parameter_count_mismatch(entry.name, entry.arity, args.len()));
            }
            let values = args
                .iter()
                .map(|arg| eval_expr(arg, store))
                .collect::<Result<SmallVec<[Value; 4]>, _>>()?;
            (entry.apply)(&values)
        }
    })
}
