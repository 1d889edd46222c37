//! Error types for editbuf.

use std::fmt;

/// Result type alias for editbuf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for editbuf operations.
///
/// Only edit dispatch can fail, and only before any mutation has begun;
/// the query surface reports out-of-range input through clamped or
/// sentinel results instead of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key input matched no known literal, whitespace-code, or meta-key
    /// mapping.
    UnrecognizedInput { key: String, code: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedInput { key, code } => {
                write!(f, "unrecognized key input: key {key:?}, code {code:?}")
            }
        }
    }
}

impl std::error::Error for Error {}
