//! Conversions between the value model and `serde_json` trees.
//!
//! The value graph carries interior mutability, cycles, and opaque
//! callables, so serde derives do not apply; interop is explicit instead.

use std::collections::HashSet;

use crate::error::ValueError;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::value::Value;

/// Build a value from a JSON tree.
///
/// Objects become records and arrays become sequences; numbers become `Int`
/// when exactly representable as `i64`, `Float` otherwise. Total: every JSON
/// tree converts.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Text(s.clone()),
        serde_json::Value::Array(items) => {
            let sequence = Sequence::new();
            for item in items {
                sequence.push(from_json(item));
            }
            Value::Sequence(sequence)
        }
        serde_json::Value::Object(fields) => {
            let record = Record::new();
            for (key, value) in fields {
                record.insert(key.clone(), from_json(value));
            }
            Value::Record(record)
        }
    }
}

/// Render a value as a JSON tree.
///
/// Sets become arrays; maps become objects and require text keys; timestamps
/// render as RFC 3339 strings and patterns as their source. Fails on
/// callables, non-finite floats, and reference cycles.
pub fn to_json(value: &Value) -> Result<serde_json::Value, ValueError> {
    convert(value, &mut HashSet::new())
}

fn convert(value: &Value, visiting: &mut HashSet<usize>) -> Result<serde_json::Value, ValueError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok((*b).into()),
        Value::Int(i) => Ok((*i).into()),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .ok_or(ValueError::Unrepresentable("a non-finite number")),
        Value::Text(s) => Ok(s.clone().into()),
        Value::Timestamp(ts) => Ok(ts.to_rfc3339().into()),
        Value::Pattern(p) => Ok(p.source().to_string().into()),
        Value::Callable(_) => Err(ValueError::Unrepresentable("a callable")),
        Value::Record(record) => {
            if !visiting.insert(record.address()) {
                return Err(ValueError::CyclicValue);
            }
            let mut object = serde_json::Map::new();
            for (key, entry) in record.entries() {
                object.insert(key, convert(&entry, visiting)?);
            }
            visiting.remove(&record.address());
            Ok(serde_json::Value::Object(object))
        }
        Value::Sequence(sequence) => {
            if !visiting.insert(sequence.address()) {
                return Err(ValueError::CyclicValue);
            }
            let mut items = Vec::with_capacity(sequence.len());
            for item in sequence.items() {
                items.push(convert(&item, visiting)?);
            }
            visiting.remove(&sequence.address());
            Ok(serde_json::Value::Array(items))
        }
        Value::Set(set) => {
            if !visiting.insert(set.address()) {
                return Err(ValueError::CyclicValue);
            }
            let mut items = Vec::with_capacity(set.len());
            for item in set.items() {
                items.push(convert(&item, visiting)?);
            }
            visiting.remove(&set.address());
            Ok(serde_json::Value::Array(items))
        }
        Value::Map(map) => {
            if !visiting.insert(map.address()) {
                return Err(ValueError::CyclicValue);
            }
            let mut object = serde_json::Map::new();
            for (key, entry) in map.entries() {
                let key = match &key {
                    Value::Text(s) => s.clone(),
                    other => return Err(ValueError::NonTextKey(other.to_string())),
                };
                object.insert(key, convert(&entry, visiting)?);
            }
            visiting.remove(&map.address());
            Ok(serde_json::Value::Object(object))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eq::deep_eq;
    use crate::map::ValueMap;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_from_json_builds_records_and_sequences() {
        let value = from_json(&json!({
            "name": "Joe",
            "age": 26,
            "scores": [1, 2.5, null],
        }));
        let record = value.as_record().unwrap();
        assert_eq!(record.get("name"), Some(Value::from("Joe")));
        assert_eq!(record.get("age"), Some(Value::from(26)));
        let scores = record.get("scores").unwrap();
        let scores = scores.as_sequence().unwrap();
        assert_eq!(scores.get(0), Some(Value::from(1)));
        assert_eq!(scores.get(1), Some(Value::from(2.5)));
        assert_eq!(scores.get(2), Some(Value::Null));
    }

    #[test]
    fn test_to_json_renders_containers() {
        let record = Record::new();
        record.insert("ok", true);
        let nested = Sequence::new();
        nested.push(1);
        record.insert("xs", Value::Sequence(nested));
        assert_eq!(
            to_json(&Value::Record(record)).unwrap(),
            json!({"ok": true, "xs": [1]})
        );
    }

    #[test]
    fn test_to_json_map_requires_text_keys() {
        let map = ValueMap::new();
        map.insert("a", 1);
        assert_eq!(to_json(&Value::Map(map)).unwrap(), json!({"a": 1}));

        let keyed_by_record = ValueMap::new();
        keyed_by_record.insert(Value::Record(Record::new()), 1);
        assert!(matches!(
            to_json(&Value::Map(keyed_by_record)),
            Err(ValueError::NonTextKey(_))
        ));
    }

    #[test]
    fn test_to_json_rejects_cycles() {
        let record = Record::new();
        record.insert("me", Value::Record(record.clone()));
        assert!(matches!(
            to_json(&Value::Record(record)),
            Err(ValueError::CyclicValue)
        ));
    }

    #[test]
    fn test_to_json_shared_substructure_is_not_a_cycle() {
        let shared = Record::new();
        shared.insert("v", 1);
        let root = Record::new();
        root.insert("a", Value::Record(shared.clone()));
        root.insert("b", Value::Record(shared));
        assert_eq!(
            to_json(&Value::Record(root)).unwrap(),
            json!({"a": {"v": 1}, "b": {"v": 1}})
        );
    }

    #[test]
    fn test_to_json_rejects_callables_and_non_finite_floats() {
        let callable = crate::callable::Callable::new(|_| Value::Null);
        assert!(to_json(&Value::Callable(callable)).is_err());
        assert!(to_json(&Value::from(f64::NAN)).is_err());
        assert!(to_json(&Value::from(f64::INFINITY)).is_err());
    }

    fn arb_json() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::from),
            any::<i64>().prop_map(serde_json::Value::from),
            "[a-z]{0,8}".prop_map(serde_json::Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4)
                    .prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(|fields| {
                    serde_json::Value::Object(fields.into_iter().collect())
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn json_round_trip_preserves_structure(json in arb_json()) {
            let value = from_json(&json);
            let back = to_json(&value).unwrap();
            prop_assert_eq!(&back, &json);
            // and converting again yields a deep-equal value
            prop_assert!(deep_eq(&value, &from_json(&back)));
        }
    }
}
