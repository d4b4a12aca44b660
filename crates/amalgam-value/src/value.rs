//! The closed value model.
//!
//! Every payload the engine can carry is one of the variants below,
//! classified once per value via [`Value::kind`] rather than by open-ended
//! runtime type tests. Containers are reference handles; everything else is
//! a leaf treated as atomic during cloning.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::callable::Callable;
use crate::map::ValueMap;
use crate::pattern::Pattern;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::set::ValueSet;

/// A heterogeneous structured value.
///
/// Cloning a `Value` clones the handle, not the contents: two clones of a
/// `Record` value alias the same storage. Use the merge engine for an
/// independent deep copy.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence marker.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    Text(String),
    /// Date-like leaf: a fixed instant.
    Timestamp(DateTime<Utc>),
    /// Pattern-matching leaf: source plus flags.
    Pattern(Pattern),
    /// Opaque function payload, carried by reference.
    Callable(Callable),
    /// Unordered string-keyed mapping.
    Record(Record),
    /// Ordered, index-addressable list.
    Sequence(Sequence),
    /// Unordered collection of distinct values.
    Set(ValueSet),
    /// Mapping with arbitrary value keys and insertion-order iteration.
    Map(ValueMap),
}

/// Top-level classification of a value, decided once via [`Value::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Record,
    Sequence,
    Set,
    Map,
    /// Primitive, timestamp, pattern, or callable: atomic during cloning.
    Leaf,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Record => "record",
            Kind::Sequence => "sequence",
            Kind::Set => "set",
            Kind::Map => "map",
            Kind::Leaf => "leaf",
        };
        write!(f, "{}", name)
    }
}

impl Value {
    /// Classify this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Record(_) => Kind::Record,
            Value::Sequence(_) => Kind::Sequence,
            Value::Set(_) => Kind::Set,
            Value::Map(_) => Kind::Map,
            _ => Kind::Leaf,
        }
    }

    /// Address of the referenced allocation for containers and callables;
    /// `None` for value-typed leaves.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Callable(c) => Some(c.address()),
            Value::Record(r) => Some(r.address()),
            Value::Sequence(s) => Some(s.address()),
            Value::Set(s) => Some(s.address()),
            Value::Map(m) => Some(m.address()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Value::Pattern(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&ValueSet> {
        match self {
            Value::Set(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Same-value equality: leaves by content (`NaN == NaN`, `-0.0 == 0.0`),
    /// containers and callables by identity.
    ///
    /// This is the equality used for set membership and map keys. For
    /// structural comparison of container contents see
    /// [`deep_eq`](crate::eq::deep_eq).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            (Value::Set(a), Value::Set(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Pattern> for Value {
    fn from(value: Pattern) -> Self {
        Value::Pattern(value)
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::Callable(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Sequence(value)
    }
}

impl From<ValueSet> for Value {
    fn from(value: ValueSet) -> Self {
        Value::Set(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::Null.kind(), Kind::Leaf);
        assert_eq!(Value::from(1).kind(), Kind::Leaf);
        assert_eq!(Value::from("x").kind(), Kind::Leaf);
        assert_eq!(Value::Record(Record::new()).kind(), Kind::Record);
        assert_eq!(Value::Sequence(Sequence::new()).kind(), Kind::Sequence);
        assert_eq!(Value::Set(ValueSet::new()).kind(), Kind::Set);
        assert_eq!(Value::Map(ValueMap::new()).kind(), Kind::Map);
    }

    #[test]
    fn test_leaves_compare_by_content() {
        assert_eq!(Value::from(3), Value::from(3));
        assert_ne!(Value::from(3), Value::from(4));
        assert_eq!(Value::from("abc"), Value::from("abc"));
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
        // Typed model: no numeric coercion between Int and Float
        assert_ne!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn test_containers_compare_by_identity() {
        let a = Record::new();
        let b = Record::new();
        assert_eq!(Value::Record(a.clone()), Value::Record(a.clone()));
        assert_ne!(Value::Record(a), Value::Record(b));
    }

    #[test]
    fn test_identity_is_stable_across_handle_clones() {
        let seq = Sequence::new();
        let v1 = Value::Sequence(seq.clone());
        let v2 = Value::Sequence(seq);
        assert_eq!(v1.identity(), v2.identity());
        assert_eq!(Value::from(5).identity(), None);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(7).as_int(), Some(7));
        assert_eq!(Value::from(2.5).as_float(), Some(2.5));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(7).as_str(), None);
    }
}
