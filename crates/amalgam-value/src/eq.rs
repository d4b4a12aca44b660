//! Cycle-safe structural equality.

use std::collections::HashSet;

use crate::value::Value;

/// Compare two values structurally.
///
/// Containers are compared by contents rather than identity, so two
/// independently built records with the same properties are `deep_eq` while
/// never being `==`. A pair of containers already under comparison higher up
/// the tree is assumed equal, the cut that makes comparison of cyclic graphs
/// terminate. Unordered containers (sets and maps) are matched greedily.
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    compare(a, b, &mut HashSet::new())
}

fn compare(a: &Value, b: &Value, visiting: &mut HashSet<(usize, usize)>) -> bool {
    match (a, b) {
        (Value::Record(x), Value::Record(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            if !visiting.insert((x.address(), y.address())) {
                return true;
            }
            let entries = x.entries();
            entries.len() == y.len()
                && entries.iter().all(|(key, value)| match y.get(key) {
                    Some(other) => compare(value, &other, visiting),
                    None => false,
                })
        }
        (Value::Sequence(x), Value::Sequence(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            if !visiting.insert((x.address(), y.address())) {
                return true;
            }
            let items = x.items();
            let others = y.items();
            items.len() == others.len()
                && items
                    .iter()
                    .zip(others.iter())
                    .all(|(value, other)| compare(value, other, visiting))
        }
        (Value::Set(x), Value::Set(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            if !visiting.insert((x.address(), y.address())) {
                return true;
            }
            match_unordered(&x.items(), &y.items(), visiting)
        }
        (Value::Map(x), Value::Map(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            if !visiting.insert((x.address(), y.address())) {
                return true;
            }
            let entries = x.entries();
            let others = y.entries();
            if entries.len() != others.len() {
                return false;
            }
            let mut used = vec![false; others.len()];
            entries.iter().all(|(key, value)| {
                others.iter().enumerate().any(|(i, (other_key, other_value))| {
                    if used[i] {
                        return false;
                    }
                    // failed attempts must not leave assumed-equal pairs behind
                    let snapshot = visiting.clone();
                    if compare(key, other_key, visiting) && compare(value, other_value, visiting) {
                        used[i] = true;
                        true
                    } else {
                        *visiting = snapshot;
                        false
                    }
                })
            })
        }
        _ => a == b,
    }
}

fn match_unordered(items: &[Value], others: &[Value], visiting: &mut HashSet<(usize, usize)>) -> bool {
    if items.len() != others.len() {
        return false;
    }
    let mut used = vec![false; others.len()];
    items.iter().all(|value| {
        others.iter().enumerate().any(|(i, other)| {
            if used[i] {
                return false;
            }
            let snapshot = visiting.clone();
            if compare(value, other, visiting) {
                used[i] = true;
                true
            } else {
                *visiting = snapshot;
                false
            }
        })
    })
}
