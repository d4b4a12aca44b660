//! # amalgam-value
//!
//! Value model for the Amalgam deep merge-clone engine.
//!
//! This crate provides:
//! - [`Value`], a closed tagged variant over primitives, opaque leaves
//!   (timestamps, patterns, callables) and the four container kinds
//! - Container handles with reference semantics ([`Record`], [`Sequence`],
//!   [`ValueSet`], [`ValueMap`]), so aliasing and cycles are expressible
//! - [`ValueKey`], the membership key used for set distinctness and map
//!   lookup
//! - Cycle-safe structural equality ([`deep_eq`]) and rendering
//! - Conversions to and from `serde_json` trees
//!
//! ## Example
//!
//! ```rust
//! use amalgam_value::{Record, Value};
//!
//! let person = Record::new();
//! person.insert("name", "Joe");
//! person.insert("age", 26);
//!
//! let value = Value::Record(person);
//! assert_eq!(value.kind().to_string(), "record");
//! ```

pub mod callable;
mod display;
pub mod eq;
pub mod error;
pub mod json;
pub mod key;
pub mod map;
pub mod pattern;
pub mod record;
pub mod sequence;
pub mod set;
pub mod value;

pub use callable::Callable;
pub use eq::deep_eq;
pub use error::ValueError;
pub use json::{from_json, to_json};
pub use key::ValueKey;
pub use map::ValueMap;
pub use pattern::{Pattern, PatternFlags};
pub use record::Record;
pub use sequence::Sequence;
pub use set::ValueSet;
pub use value::{Kind, Value};
