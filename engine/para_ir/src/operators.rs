//! Unary and binary operator kinds.
//!
//! Each variant names one stateless operator implementation. The evaluator
//! resolves the tag to its implementation; the printer uses the symbols and
//! precedence levels below.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the infix symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    /// - 2: `^`
    /// - 3: `*` `/`
    /// - 4: `+` `-`
    /// - 7: `<` `>` `<=` `>=`
    /// - 8: `==` `!=`
    /// - 12: `&&`
    /// - 13: `||`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Power => 2,
            Self::Multiply | Self::Divide => 3,
            Self::Add | Self::Subtract => 4,
            Self::LessThan | Self::LessOrEqual | Self::GreaterThan | Self::GreaterOrEqual => 7,
            Self::Equal | Self::NotEqual => 8,
            Self::And => 12,
            Self::Or => 13,
        }
    }

    /// Whether `a op (b op c)` needs no parentheses, i.e. the operator groups
    /// to the right.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Power)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    /// Returns the prefix symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}
