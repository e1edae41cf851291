//! Built-in function implementations.
//!
//! Arity is checked by the evaluator before `apply` runs, so each `apply`
//! may index its arguments according to its declared `ARITY`. Slice patterns
//! are still used so a direct call with the wrong count fails cleanly instead
//! of panicking.

use crate::capability::Function;
use crate::errors::{domain_error, parameter_count_mismatch, wrong_arg_type, EvalResult};
use crate::EvaluationError;
use para_ir::{FunctionArity, Value};

/// Extract a number argument or fail with a type mismatch naming `function`.
#[inline]
fn number_arg(function: &'static str, value: &Value) -> Result<f64, EvaluationError> {
    value
        .as_number()
        .ok_or_else(|| wrong_arg_type(function, "a number", value))
}

#[inline]
fn vector_arg(function: &'static str, value: &Value) -> Result<(f64, f64), EvaluationError> {
    match value {
        Value::Vector { x, y } => Ok((*x, *y)),
        _ => Err(wrong_arg_type(function, "a vector", value)),
    }
}

#[inline]
fn arity_error<F: Function>(args: &[Value]) -> EvaluationError {
    parameter_count_mismatch(F::NAME, F::ARITY, args.len())
}

/// Fold numeric arguments with `pick`, rejecting an empty list.
fn extremum(
    function: &'static str,
    args: &[Value],
    pick: fn(f64, f64) -> f64,
) -> EvalResult {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| domain_error(format!("{function} of no arguments")))?;
    let mut acc = number_arg(function, first)?;
    for arg in rest {
        acc = pick(acc, number_arg(function, arg)?);
    }
    Ok(Value::Number(acc))
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Abs;

impl Function for Abs {
    const NAME: &'static str = "abs";
    const ARITY: FunctionArity = FunctionArity::Fixed(1);

    fn apply(&self, args: &[Value]) -> EvalResult {
        let [value] = args else {
            return Err(arity_error::<Self>(args));
        };
        Ok(Value::Number(number_arg(Self::NAME, value)?.abs()))
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Sqrt;

impl Function for Sqrt {
    const NAME: &'static str = "sqrt";
    const ARITY: FunctionArity = FunctionArity::Fixed(1);

    fn apply(&self, args: &[Value]) -> EvalResult {
        let [value] = args else {
            return Err(arity_error::<Self>(args));
        };
        let n = number_arg(Self::NAME, value)?;
        if n < 0.0 {
            return Err(domain_error(format!("square root of negative number {n}")));
        }
        Ok(Value::Number(n.sqrt()))
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Min;

impl Function for Min {
    const NAME: &'static str = "min";
    const ARITY: FunctionArity = FunctionArity::Variadic;

    fn apply(&self, args: &[Value]) -> EvalResult {
        extremum(Self::NAME, args, f64::min)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Max;

impl Function for Max {
    const NAME: &'static str = "max";
    const ARITY: FunctionArity = FunctionArity::Variadic;

    fn apply(&self, args: &[Value]) -> EvalResult {
        extremum(Self::NAME, args, f64::max)
    }
}

/// Sum of numbers. The empty sum is zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sum;

impl Function for Sum {
    const NAME: &'static str = "sum";
    const ARITY: FunctionArity = FunctionArity::Variadic;

    fn apply(&self, args: &[Value]) -> EvalResult {
        let mut total = 0.0;
        for arg in args {
            total += number_arg(Self::NAME, arg)?;
        }
        Ok(Value::Number(total))
    }
}

/// `clamp(value, lo, hi)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Clamp;

impl Function for Clamp {
    const NAME: &'static str = "clamp";
    const ARITY: FunctionArity = FunctionArity::Fixed(3);

    fn apply(&self, args: &[Value]) -> EvalResult {
        let [value, lo, hi] = args else {
            return Err(arity_error::<Self>(args));
        };
        let value = number_arg(Self::NAME, value)?;
        let lo = number_arg(Self::NAME, lo)?;
        let hi = number_arg(Self::NAME, hi)?;
        // f64::clamp panics on an inverted or NaN range.
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(domain_error(format!("clamp range [{lo}, {hi}] is empty")));
        }
        Ok(Value::Number(value.clamp(lo, hi)))
    }
}

/// `vec(x, y)`: builds a vector from two numbers.
#[derive(Copy, Clone, Debug, Default)]
pub struct VectorOf;

impl Function for VectorOf {
    const NAME: &'static str = "vec";
    const ARITY: FunctionArity = FunctionArity::Fixed(2);

    fn apply(&self, args: &[Value]) -> EvalResult {
        let [x, y] = args else {
            return Err(arity_error::<Self>(args));
        };
        Ok(Value::vector(
            number_arg(Self::NAME, x)?,
            number_arg(Self::NAME, y)?,
        ))
    }
}

/// Euclidean length of a vector.
#[derive(Copy, Clone, Debug, Default)]
pub struct Length;

impl Function for Length {
    const NAME: &'static str = "length";
    const ARITY: FunctionArity = FunctionArity::Fixed(1);

    fn apply(&self, args: &[Value]) -> EvalResult {
        let [v] = args else {
            return Err(arity_error::<Self>(args));
        };
        let (x, y) = vector_arg(Self::NAME, v)?;
        Ok(Value::Number(x.hypot(y)))
    }
}

/// Euclidean distance between two points.
#[derive(Copy, Clone, Debug, Default)]
pub struct Distance;

impl Function for Distance {
    const NAME: &'static str = "distance";
    const ARITY: FunctionArity = FunctionArity::Fixed(2);

    fn apply(&self, args: &[Value]) -> EvalResult {
        let [a, b] = args else {
            return Err(arity_error::<Self>(args));
        };
        let (ax, ay) = vector_arg(Self::NAME, a)?;
        let (bx, by) = vector_arg(Self::NAME, b)?;
        Ok(Value::Number((bx - ax).hypot(by - ay)))
    }
}
