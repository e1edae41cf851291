//! Parameter stores.

use crate::errors::duplicate_definition;
use crate::EvaluationError;
use para_ir::{ReferenceId, Value};
use rustc_hash::FxHashMap;

/// Read access to the current value bindings.
///
/// A lookup is synchronous and either returns a value or nothing. The
/// evaluator assumes no ordering or transactional guarantees beyond that.
pub trait DataStore {
    fn lookup(&self, id: ReferenceId) -> Option<Value>;
}

impl<S: DataStore + ?Sized> DataStore for &S {
    fn lookup(&self, id: ReferenceId) -> Option<Value> {
        (**self).lookup(id)
    }
}

/// In-memory parameter store.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    bindings: FxHashMap<ReferenceId, Value>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new binding.
    ///
    /// Fails with `DuplicateDefinition` if `id` is already bound; the existing
    /// binding is left unchanged.
    pub fn define(&mut self, id: ReferenceId, value: Value) -> Result<(), EvaluationError> {
        if self.bindings.contains_key(&id) {
            return Err(duplicate_definition(id));
        }
        self.bindings.insert(id, value);
        Ok(())
    }

    /// Bind `id`, replacing any previous value. Returns the previous value.
    pub fn set(&mut self, id: ReferenceId, value: Value) -> Option<Value> {
        self.bindings.insert(id, value)
    }

    pub fn remove(&mut self, id: ReferenceId) -> Option<Value> {
        self.bindings.remove(&id)
    }

    pub fn contains(&self, id: ReferenceId) -> bool {
        self.bindings.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl DataStore for DataSet {
    #[inline]
    fn lookup(&self, id: ReferenceId) -> Option<Value> {
        self.bindings.get(&id).copied()
    }
}

impl FromIterator<(ReferenceId, Value)> for DataSet {
    fn from_iter<I: IntoIterator<Item = (ReferenceId, Value)>>(iter: I) -> Self {
        DataSet {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    const R1: ReferenceId = ReferenceId::new(1);
    const R2: ReferenceId = ReferenceId::new(2);

    #[test]
    fn define_then_lookup() {
        let mut data = DataSet::new();
        data.define(R1, Value::Number(5.0)).unwrap();
        assert_eq!(data.lookup(R1), Some(Value::Number(5.0)));
        assert_eq!(data.lookup(R2), None);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn define_twice_is_duplicate_and_keeps_first() {
        let mut data = DataSet::new();
        data.define(R1, Value::Number(1.0)).unwrap();
        let err = data.define(R1, Value::Number(2.0)).unwrap_err();
        assert_eq!(err, EvaluationError::DuplicateDefinition(R1));
        assert_eq!(data.lookup(R1), Some(Value::Number(1.0)));
    }

    #[test]
    fn set_overwrites_and_remove_unbinds() {
        let mut data: DataSet = [(R1, Value::Bool(true))].into_iter().collect();
        assert_eq!(data.set(R1, Value::Bool(false)), Some(Value::Bool(true)));
        assert_eq!(data.lookup(R1), Some(Value::Bool(false)));
        assert_eq!(data.remove(R1), Some(Value::Bool(false)));
        assert!(!data.contains(R1));
        assert!(data.is_empty());
    }

    #[test]
    fn store_reference_is_a_store() {
        fn first<S: DataStore>(store: S) -> Option<Value> {
            store.lookup(R1)
        }
        let data: DataSet = [(R1, Value::Number(3.0))].into_iter().collect();
        assert_eq!(first(&data), Some(Value::Number(3.0)));
    }
}
