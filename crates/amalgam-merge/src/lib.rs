//! # amalgam-merge
//!
//! Deep merge-and-clone of heterogeneous structured values.
//!
//! One operation: [`merge_objects`] takes one or more values of the same
//! top-level kind and produces a single freshly allocated combination,
//! applied left to right with later inputs winning on key collisions.
//! Inputs are never mutated and the result shares no mutable nested
//! structure with them; cycles and aliasing within an input are preserved
//! in the clone. [`clone_object`] and [`clone_value`] are the single-input
//! convenience forms.
//!
//! ## Example
//!
//! ```rust
//! use amalgam_merge::merge_objects;
//! use amalgam_value::{Record, Value};
//!
//! let base = Record::new();
//! base.insert("name", "Joe");
//! base.insert("job", "mechanic");
//!
//! let update = Record::new();
//! update.insert("job", "astronaut");
//!
//! let merged = merge_objects(&[Value::Record(base), Value::Record(update)]).unwrap();
//! let merged = merged.as_record().unwrap();
//! assert_eq!(merged.get("name"), Some(Value::from("Joe")));
//! assert_eq!(merged.get("job"), Some(Value::from("astronaut")));
//! ```

pub mod clone;
pub mod combine;
pub mod error;

pub use clone::{clone_object, clone_value};
pub use combine::merge_objects;
pub use error::MergeError;

// the value model, re-exported for convenience
pub use amalgam_value::{Kind, Value};
