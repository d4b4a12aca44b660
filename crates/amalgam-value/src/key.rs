//! Membership keys: same-value equality over the value model.

use crate::pattern::PatternFlags;
use crate::value::Value;

/// Hashable key derived from a [`Value`], used for set distinctness and map
/// lookup.
///
/// Leaves key by content, containers and callables by identity. `NaN` keys
/// equal to `NaN`, and `-0.0` folds into `+0.0`, so a set can hold at most
/// one of each.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Null,
    Bool(bool),
    Int(i64),
    /// Normalised bit pattern of the float.
    Float(u64),
    Text(String),
    /// Seconds and subsecond nanoseconds since the epoch.
    Timestamp(i64, u32),
    Pattern(String, PatternFlags),
    /// Containers and callables: the allocation address.
    Reference(usize),
}

impl ValueKey {
    /// Derive the membership key for a value.
    pub fn of(value: &Value) -> ValueKey {
        match value {
            Value::Null => ValueKey::Null,
            Value::Bool(b) => ValueKey::Bool(*b),
            Value::Int(i) => ValueKey::Int(*i),
            Value::Float(f) => ValueKey::Float(normalize_float(*f)),
            Value::Text(s) => ValueKey::Text(s.clone()),
            Value::Timestamp(ts) => {
                ValueKey::Timestamp(ts.timestamp(), ts.timestamp_subsec_nanos())
            }
            Value::Pattern(p) => ValueKey::Pattern(p.source().to_string(), p.flags()),
            Value::Callable(c) => ValueKey::Reference(c.address()),
            Value::Record(r) => ValueKey::Reference(r.address()),
            Value::Sequence(s) => ValueKey::Reference(s.address()),
            Value::Set(s) => ValueKey::Reference(s.address()),
            Value::Map(m) => ValueKey::Reference(m.address()),
        }
    }
}

fn normalize_float(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        // folds -0.0 into +0.0
        0
    } else {
        f.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_float_keys_normalise() {
        assert_eq!(
            ValueKey::of(&Value::from(f64::NAN)),
            ValueKey::of(&Value::from(-f64::NAN))
        );
        assert_eq!(
            ValueKey::of(&Value::from(0.0)),
            ValueKey::of(&Value::from(-0.0))
        );
        assert_ne!(
            ValueKey::of(&Value::from(1.5)),
            ValueKey::of(&Value::from(2.5))
        );
    }

    #[test]
    fn test_int_and_float_keys_are_distinct() {
        assert_ne!(
            ValueKey::of(&Value::from(1)),
            ValueKey::of(&Value::from(1.0))
        );
    }

    #[test]
    fn test_container_keys_are_identity() {
        let record = Record::new();
        let same = Value::Record(record.clone());
        let alias = Value::Record(record);
        let other = Value::Record(Record::new());
        assert_eq!(ValueKey::of(&same), ValueKey::of(&alias));
        assert_ne!(ValueKey::of(&same), ValueKey::of(&other));
    }
}
