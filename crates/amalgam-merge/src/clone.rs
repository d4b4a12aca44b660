//! Deep cloning with an identity-keyed visited map.

use std::collections::HashMap;

use amalgam_value::{Record, Sequence, Value, ValueMap, ValueSet};

/// Deep clone of a single value: strictly a merge of one.
///
/// The result is deeply equal to the input but shares no mutable nested
/// structure with it. Cycles and aliasing inside the input are reproduced
/// with the same topology in the clone.
pub fn clone_object(value: &Value) -> Value {
    Cloner::new().clone_value(value)
}

/// Alias of [`clone_object`].
pub fn clone_value(value: &Value) -> Value {
    clone_object(value)
}

/// Recursive cloner carrying the visited map for one input.
///
/// The map goes from source allocation address to the clone built for it.
/// Each fresh container is registered *before* its children are cloned, so
/// a back-edge to an object still in progress resolves to the in-progress
/// clone: cycles terminate and intra-input aliasing is preserved.
pub(crate) struct Cloner {
    visited: HashMap<usize, Value>,
}

impl Cloner {
    pub fn new() -> Self {
        Self {
            visited: HashMap::new(),
        }
    }

    pub fn clone_value(&mut self, value: &Value) -> Value {
        match value {
            // primitives are immutable, returned as-is
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_) => {
                value.clone()
            }
            // fresh instance, same instant
            Value::Timestamp(ts) => Value::Timestamp(*ts),
            // fresh instance, same source and flags
            Value::Pattern(pattern) => Value::Pattern(pattern.clone()),
            // closure state cannot be meaningfully duplicated; carried by
            // reference, still invokable on the result
            Value::Callable(callable) => Value::Callable(callable.clone()),
            Value::Record(record) => Value::Record(self.clone_record(record)),
            Value::Sequence(sequence) => Value::Sequence(self.clone_sequence(sequence)),
            Value::Set(set) => Value::Set(self.clone_set(set)),
            Value::Map(map) => Value::Map(self.clone_map(map)),
        }
    }

    pub fn clone_record(&mut self, source: &Record) -> Record {
        if let Some(Value::Record(existing)) = self.visited.get(&source.address()) {
            return existing.clone();
        }
        let target = Record::new();
        self.visited
            .insert(source.address(), Value::Record(target.clone()));
        for (key, value) in source.entries() {
            target.insert(key, self.clone_value(&value));
        }
        target
    }

    pub fn clone_sequence(&mut self, source: &Sequence) -> Sequence {
        if let Some(Value::Sequence(existing)) = self.visited.get(&source.address()) {
            return existing.clone();
        }
        let target = Sequence::new();
        self.visited
            .insert(source.address(), Value::Sequence(target.clone()));
        for item in source.items() {
            target.push(self.clone_value(&item));
        }
        target
    }

    pub fn clone_set(&mut self, source: &ValueSet) -> ValueSet {
        if let Some(Value::Set(existing)) = self.visited.get(&source.address()) {
            return existing.clone();
        }
        let target = ValueSet::new();
        self.visited
            .insert(source.address(), Value::Set(target.clone()));
        for item in source.items() {
            target.insert(self.clone_value(&item));
        }
        target
    }

    pub fn clone_map(&mut self, source: &ValueMap) -> ValueMap {
        if let Some(Value::Map(existing)) = self.visited.get(&source.address()) {
            return existing.clone();
        }
        let target = ValueMap::new();
        self.visited
            .insert(source.address(), Value::Map(target.clone()));
        for (key, value) in source.entries() {
            // keys keep their identity so lookups with the caller's key
            // handles still hit on the clone
            target.insert(key, self.clone_value(&value));
        }
        target
    }
}
