//! Runtime values.

use std::fmt;

/// A value produced or consumed by a formula.
///
/// The set of kinds is closed. Equality is structural, with IEEE semantics
/// for the float components (`NaN != NaN`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    /// A 2D geometric vector.
    Vector { x: f64, y: f64 },
}

impl Value {
    /// Create a vector value.
    #[inline]
    pub const fn vector(x: f64, y: f64) -> Self {
        Value::Vector { x, y }
    }

    /// The boolean payload, if this is a boolean.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Kind name used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Vector { .. } => "vector",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Vector { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_matches_kind() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Number(2.0).as_bool(), None);
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::vector(1.0, 2.0).as_number(), None);
    }

    #[test]
    fn display_uses_shortest_float_form() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-0.25).to_string(), "-0.25");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::vector(1.0, -2.5).to_string(), "(1, -2.5)");
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::from(1.0).type_name(), "number");
        assert_eq!(Value::vector(0.0, 0.0).type_name(), "vector");
    }
}
