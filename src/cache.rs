//! Shared compile cache for frequently used paths.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::ast::DotPath;
use crate::error::PathError;
use crate::evaluator::Evaluator;

/// A thread-safe memoization table from raw path strings to compiled paths.
///
/// Construct one cache and share it wherever the same path strings recur;
/// compilation then happens once per distinct string instead of once per
/// lookup. Entries are keyed by the exact raw text (escapes included) and
/// are never evicted, so the table grows with the number of distinct paths
/// it sees — share an instance only for a bounded set of path strings.
pub struct PathCache {
    compiled: Mutex<HashMap<String, DotPath>>,
}

impl PathCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            compiled: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached compilation of `path`, compiling and storing it
    /// on a first miss.
    ///
    /// The lock is held for the probe and for the store, not across the
    /// compile itself, so two threads racing a first miss may both compile
    /// the same string; the second store overwrites the first with an
    /// equivalent value. Compile errors propagate to the caller and are
    /// never cached.
    pub fn get_or_compile(&self, path: &str) -> Result<DotPath, PathError> {
        if let Ok(cache) = self.compiled.lock() {
            if let Some(compiled) = cache.get(path) {
                return Ok(compiled.clone());
            }
        }

        let compiled = DotPath::compile(path)?;

        if let Ok(mut cache) = self.compiled.lock() {
            cache.insert(path.to_string(), compiled.clone());
        }

        Ok(compiled)
    }

    /// Compiles `path` through the cache and looks it up in `data`.
    ///
    /// Returns exactly what [`crate::lookup_raw`] would return for the same
    /// arguments; only the compilation cost differs on repeat calls.
    pub fn lookup<'a>(&self, path: &str, data: &'a Value) -> Result<&'a Value, PathError> {
        let compiled = self.get_or_compile(path)?;
        Evaluator::new(data).lookup(&compiled)
    }

    /// Returns the number of distinct paths compiled so far.
    pub fn len(&self) -> usize {
        self.compiled.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Returns true if no path has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new()
    }
}
