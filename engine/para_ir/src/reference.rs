//! Reference identifiers into the parameter store.

use std::fmt;

/// Key of a value binding in an external store.
///
/// A reference never owns a value and never aliases an expression: it names
/// a store entry. Equality and hashing are those of the wrapped id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ReferenceId(u32);

impl ReferenceId {
    /// Create a reference from its raw id.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ReferenceId(raw)
    }

    /// Get the raw id.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceId({})", self.0)
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl From<u32> for ReferenceId {
    fn from(raw: u32) -> Self {
        ReferenceId(raw)
    }
}
