//! Map container: arbitrary value keys, insertion-order iteration.

use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

use crate::key::ValueKey;
use crate::value::Value;

/// A shared handle to a mapping from arbitrary values to values.
///
/// Distinct from [`Record`](crate::record::Record) because keys may be any
/// value, not just text: lookup follows [`ValueKey`] equality, so container
/// keys are found by identity. Entries iterate in insertion order, and
/// re-inserting an existing key keeps its original position and key handle.
#[derive(Clone, Default)]
pub struct ValueMap {
    inner: Rc<RefCell<IndexMap<ValueKey, (Value, Value)>>>,
}

impl ValueMap {
    /// Create a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `key` with `value`, returning the previous value for an
    /// existing key. The first-inserted key handle and entry position win.
    pub fn insert(&self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let lookup = ValueKey::of(&key);
        let mut inner = self.inner.borrow_mut();
        match inner.get_mut(&lookup) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                inner.insert(lookup, (key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.inner
            .borrow()
            .get(&ValueKey::of(key))
            .map(|(_, value)| value.clone())
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.inner.borrow().contains_key(&ValueKey::of(key))
    }

    /// Remove an entry, returning its value. Remaining entries keep their
    /// relative order.
    pub fn remove(&self, key: &Value) -> Option<Value> {
        self.inner
            .borrow_mut()
            .shift_remove(&ValueKey::of(key))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Snapshot of the entries in insertion order.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.inner.borrow().values().cloned().collect()
    }

    /// Snapshot of the keys in insertion order.
    pub fn keys(&self) -> Vec<Value> {
        self.inner
            .borrow()
            .values()
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Snapshot of the values in insertion order.
    pub fn values(&self) -> Vec<Value> {
        self.inner
            .borrow()
            .values()
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Identity of the underlying allocation.
    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    /// Whether two handles alias the same storage.
    pub fn ptr_eq(&self, other: &ValueMap) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_map_object_keys_lookup_by_identity() {
        let john = Record::new();
        john.insert("name", "John Doe");
        let lily = Record::new();
        lily.insert("name", "Lily Bush");

        let map = ValueMap::new();
        map.insert(Value::Record(john.clone()), "admin");
        map.insert(Value::Record(lily.clone()), "editor");

        assert_eq!(map.get(&Value::Record(john)), Some(Value::from("admin")));
        assert_eq!(map.get(&Value::Record(lily)), Some(Value::from("editor")));
        // an equal-looking but distinct record is not a key
        let stranger = Record::new();
        stranger.insert("name", "John Doe");
        assert_eq!(map.get(&Value::Record(stranger)), None);
    }

    #[test]
    fn test_map_reinsert_replaces_value_keeps_position() {
        let map = ValueMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let previous = map.insert("a", 10);
        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(
            map.entries(),
            vec![
                (Value::from("a"), Value::from(10)),
                (Value::from("b"), Value::from(2)),
            ]
        );
    }

    #[test]
    fn test_map_text_keys() {
        let map = ValueMap::new();
        map.insert("color", "red");
        assert!(map.contains_key(&Value::from("color")));
        assert_eq!(map.get(&Value::from("color")), Some(Value::from("red")));
    }

    #[test]
    fn test_map_remove_keeps_order() {
        let map: ValueMap = vec![
            (Value::from(1), Value::from("one")),
            (Value::from(2), Value::from("two")),
            (Value::from(3), Value::from("three")),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.remove(&Value::from(2)), Some(Value::from("two")));
        assert_eq!(map.keys(), vec![Value::from(1), Value::from(3)]);
        assert_eq!(map.len(), 2);
    }
}
