//! Function kinds and their declared arity.

use std::fmt;

/// Declared constraint on the number of arguments a function takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionArity {
    /// Exactly this many arguments.
    Fixed(usize),
    /// Any number of arguments, including none.
    Variadic,
}

impl FunctionArity {
    /// Whether a call with `count` arguments satisfies this arity.
    #[inline]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Fixed(expected) => count == expected,
            Self::Variadic => true,
        }
    }
}

impl fmt::Display for FunctionArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(1) => write!(f, "exactly 1 argument"),
            Self::Fixed(n) => write!(f, "exactly {n} arguments"),
            Self::Variadic => write!(f, "any number of arguments"),
        }
    }
}

/// Built-in functions callable from a formula.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionKind {
    Abs,
    Sqrt,
    Min,
    Max,
    Sum,
    Clamp,
    /// Builds a vector from two numbers.
    Vector,
    Length,
    Distance,
}

impl FunctionKind {
    /// Every function kind, in declaration order.
    pub const ALL: [FunctionKind; 9] = [
        Self::Abs,
        Self::Sqrt,
        Self::Min,
        Self::Max,
        Self::Sum,
        Self::Clamp,
        Self::Vector,
        Self::Length,
        Self::Distance,
    ];

    /// The name used when rendering a call.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Clamp => "clamp",
            Self::Vector => "vec",
            Self::Length => "length",
            Self::Distance => "distance",
        }
    }

    /// Declared arity, available without an implementation instance.
    pub const fn arity(self) -> FunctionArity {
        match self {
            Self::Abs | Self::Sqrt | Self::Length => FunctionArity::Fixed(1),
            Self::Vector | Self::Distance => FunctionArity::Fixed(2),
            Self::Clamp => FunctionArity::Fixed(3),
            Self::Min | Self::Max | Self::Sum => FunctionArity::Variadic,
        }
    }
}
