//! Seed selection and the left fold over the inputs.

use amalgam_value::{Kind, Record, Sequence, Value, ValueMap, ValueSet};

use crate::clone::Cloner;
use crate::error::MergeError;

/// Merge one or more values into a single freshly allocated result.
///
/// The first input's kind decides the output kind; the accumulation starts
/// from an empty container of that kind, so the result is always a new
/// allocation distinct from every input, even for a single input or
/// repeated references to the same object. Inputs are folded in left to
/// right, each one deep-cloned with its own visited map before combining:
///
/// - sequences concatenate, in order, without deduplication
/// - sets union; an already-present member keeps its position
/// - maps union entries; on key collision the later value wins and the
///   entry keeps its original position, with keys carried by reference so
///   identity-keyed lookup keeps working
/// - records copy properties; on key collision the later (cloned) value wins
/// - leaves degenerate to a clone of the last input
///
/// Inputs are never mutated.
///
/// # Errors
///
/// [`MergeError::NoInputs`] when called with an empty slice, and
/// [`MergeError::KindMismatch`] when an input's top-level kind differs from
/// the first input's.
pub fn merge_objects(inputs: &[Value]) -> Result<Value, MergeError> {
    let first = inputs.first().ok_or(MergeError::NoInputs)?;
    match first.kind() {
        Kind::Sequence => merge_sequences(inputs),
        Kind::Set => merge_sets(inputs),
        Kind::Map => merge_maps(inputs),
        Kind::Record => merge_records(inputs),
        Kind::Leaf => merge_leaves(inputs),
    }
}

fn kind_mismatch(expected: Kind, value: &Value, index: usize) -> MergeError {
    MergeError::KindMismatch {
        expected,
        found: value.kind(),
        index,
    }
}

fn merge_sequences(inputs: &[Value]) -> Result<Value, MergeError> {
    let merged = Sequence::new();
    for (index, input) in inputs.iter().enumerate() {
        let Value::Sequence(sequence) = input else {
            return Err(kind_mismatch(Kind::Sequence, input, index));
        };
        let cloned = Cloner::new().clone_sequence(sequence);
        merged.extend(cloned.items());
    }
    Ok(Value::Sequence(merged))
}

fn merge_sets(inputs: &[Value]) -> Result<Value, MergeError> {
    let merged = ValueSet::new();
    for (index, input) in inputs.iter().enumerate() {
        let Value::Set(set) = input else {
            return Err(kind_mismatch(Kind::Set, input, index));
        };
        let cloned = Cloner::new().clone_set(set);
        for item in cloned.items() {
            merged.insert(item);
        }
    }
    Ok(Value::Set(merged))
}

fn merge_maps(inputs: &[Value]) -> Result<Value, MergeError> {
    let merged = ValueMap::new();
    for (index, input) in inputs.iter().enumerate() {
        let Value::Map(map) = input else {
            return Err(kind_mismatch(Kind::Map, input, index));
        };
        let cloned = Cloner::new().clone_map(map);
        for (key, value) in cloned.entries() {
            merged.insert(key, value);
        }
    }
    Ok(Value::Map(merged))
}

fn merge_records(inputs: &[Value]) -> Result<Value, MergeError> {
    let merged = Record::new();
    for (index, input) in inputs.iter().enumerate() {
        let Value::Record(record) = input else {
            return Err(kind_mismatch(Kind::Record, input, index));
        };
        let cloned = Cloner::new().clone_record(record);
        for (key, value) in cloned.entries() {
            merged.insert(key, value);
        }
    }
    Ok(Value::Record(merged))
}

fn merge_leaves(inputs: &[Value]) -> Result<Value, MergeError> {
    let mut merged = Value::Null;
    for (index, input) in inputs.iter().enumerate() {
        if input.kind() != Kind::Leaf {
            return Err(kind_mismatch(Kind::Leaf, input, index));
        }
        merged = Cloner::new().clone_value(input);
    }
    Ok(merged)
}
