//! Error types for the value model.

use thiserror::Error;

/// Errors raised by value construction and JSON interop.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("value contains a reference cycle")]
    CyclicValue,

    #[error("map key is not text: {0}")]
    NonTextKey(String),

    #[error("cannot represent {0} as JSON")]
    Unrepresentable(&'static str),
}

pub type Result<T> = std::result::Result<T, ValueError>;
