//! Dot-delimited path lookups over decoded JSON value trees.
//!
//! This crate compiles path strings like `servers.@last.host` into a
//! reusable [`DotPath`] and evaluates them against a [`serde_json::Value`]
//! tree, replacing manual chains of type checks and index arithmetic with
//! a single expression. The tree is whatever an external decoder produced;
//! nothing here parses documents or writes values back.
//!
//! # Supported Syntax
//!
//! - `key` - named member of an object
//! - `@0`, `@111` - array element by absolute position
//! - `@-1`, `@-100` - array element counted from the end
//! - `@first`, `@last` - shorthand for `@0` and `@-1`
//! - `\.`, `\@`, `\\` - literal `.`, `@`, and `\` inside a key
//!
//! # Examples
//!
//! ```
//! use dotpath::{lookup_raw, PathError};
//! use serde_json::json;
//!
//! let tree = json!({"servers": [{"host": "alpha"}, {"host": "omega"}]});
//!
//! let host = lookup_raw("servers.@last.host", &tree).unwrap();
//! assert_eq!(host, "omega");
//!
//! // A path that does not resolve is NotFound, whatever the reason.
//! assert_eq!(lookup_raw("servers.@5.host", &tree), Err(PathError::NotFound));
//! ```
//!
//! Compilation and lookup are separate steps. For paths used repeatedly,
//! compile once with [`DotPath::compile`] (or share a [`PathCache`]) and
//! evaluate the compiled form.

pub mod ast;
pub mod cache;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{ContainerKind, DotPath, PathSegment};
pub use cache::PathCache;
pub use error::PathError;
pub use evaluator::Evaluator;
pub use parser::Parser;

use serde_json::Value;

/// Compiles a raw path string into a [`DotPath`].
pub fn compile(path: &str) -> Result<DotPath, PathError> {
    DotPath::compile(path)
}

/// Looks up a value addressed by a precompiled path.
pub fn lookup_compiled<'a>(path: &DotPath, data: &'a Value) -> Result<&'a Value, PathError> {
    Evaluator::new(data).lookup(path)
}

/// Compiles `path` and looks it up in `data` in one call.
///
/// Compilation cost is paid on every invocation; precompile with
/// [`DotPath::compile`] or use a [`PathCache`] for frequently used paths.
pub fn lookup_raw<'a>(path: &str, data: &'a Value) -> Result<&'a Value, PathError> {
    let compiled = DotPath::compile(path)?;
    Evaluator::new(data).lookup(&compiled)
}
