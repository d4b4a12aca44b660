//! Cycle-aware rendering.
//!
//! A derived `Debug` would recurse forever on cyclic values, so containers
//! render through a visited set and back-edges print as `<cycle>`. Shared
//! but non-cyclic substructure still prints in full.

use std::collections::HashSet;
use std::fmt;

use crate::map::ValueMap;
use crate::record::Record;
use crate::sequence::Sequence;
use crate::set::ValueSet;
use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self, &mut HashSet::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self, &mut HashSet::new())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &Value::Record(self.clone()), &mut HashSet::new())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &Value::Sequence(self.clone()), &mut HashSet::new())
    }
}

impl fmt::Debug for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &Value::Set(self.clone()), &mut HashSet::new())
    }
}

impl fmt::Debug for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &Value::Map(self.clone()), &mut HashSet::new())
    }
}

fn render(f: &mut fmt::Formatter<'_>, value: &Value, visiting: &mut HashSet<usize>) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Int(i) => write!(f, "{}", i),
        Value::Float(x) => write!(f, "{}", x),
        Value::Text(s) => write!(f, "{:?}", s),
        Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        Value::Pattern(p) => write!(f, "{}", p),
        Value::Callable(c) => write!(f, "{:?}", c),
        Value::Record(record) => {
            if !visiting.insert(record.address()) {
                return write!(f, "<cycle>");
            }
            write!(f, "{{")?;
            for (i, (key, entry)) in record.entries().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: ", key)?;
                render(f, entry, visiting)?;
            }
            write!(f, "}}")?;
            visiting.remove(&record.address());
            Ok(())
        }
        Value::Sequence(sequence) => {
            if !visiting.insert(sequence.address()) {
                return write!(f, "<cycle>");
            }
            write!(f, "[")?;
            for (i, item) in sequence.items().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                render(f, item, visiting)?;
            }
            write!(f, "]")?;
            visiting.remove(&sequence.address());
            Ok(())
        }
        Value::Set(set) => {
            if !visiting.insert(set.address()) {
                return write!(f, "<cycle>");
            }
            write!(f, "set{{")?;
            for (i, item) in set.items().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                render(f, item, visiting)?;
            }
            write!(f, "}}")?;
            visiting.remove(&set.address());
            Ok(())
        }
        Value::Map(map) => {
            if !visiting.insert(map.address()) {
                return write!(f, "<cycle>");
            }
            write!(f, "map{{")?;
            for (i, (key, entry)) in map.entries().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                render(f, key, visiting)?;
                write!(f, " => ")?;
                render(f, entry, visiting)?;
            }
            write!(f, "}}")?;
            visiting.remove(&map.address());
            Ok(())
        }
    }
}
