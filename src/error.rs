//! Error types for path compilation and lookup.

use std::fmt;

/// Errors that can occur while compiling or evaluating a dot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string is structurally malformed: empty input, an empty
    /// segment, or a trailing separator.
    WrongPath { message: String },
    /// An `@` segment's index text is neither `first`, `last`, nor a
    /// base-10 signed integer.
    InvalidIndex { text: String },
    /// The path does not resolve against the given data: a container kind
    /// mismatch, an absent key, or an out-of-bounds index.
    NotFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::WrongPath { message } => write!(f, "wrong path: {}", message),
            PathError::InvalidIndex { text } => write!(f, "invalid array index '{}'", text),
            PathError::NotFound => write!(f, "path not found"),
        }
    }
}

impl std::error::Error for PathError {}
