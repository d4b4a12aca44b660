//! Error types for the merge engine.

use amalgam_value::Kind;
use thiserror::Error;

/// Errors reported by [`merge_objects`](crate::merge_objects).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The contract requires at least one input.
    #[error("merge requires at least one input value")]
    NoInputs,

    /// Inputs must all share the first input's top-level kind; mixing is
    /// reported rather than silently coerced.
    #[error("cannot merge {found} into {expected} (input {index})")]
    KindMismatch {
        expected: Kind,
        found: Kind,
        index: usize,
    },
}
