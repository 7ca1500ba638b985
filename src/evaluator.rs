//! Lookup engine walking compiled paths against decoded JSON trees.

use serde_json::Value;

use crate::ast::{ContainerKind, DotPath, PathSegment};
use crate::error::PathError;

/// Evaluates compiled paths against a borrowed value tree.
///
/// The tree is read-only; results borrow from it. Evaluation is pure and
/// reentrant, so one `Evaluator` (or many) may be used from multiple
/// threads as long as the caller does not mutate the tree concurrently.
pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator rooted at the given value.
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Walks the path segment by segment and returns the addressed value.
    ///
    /// The first segment that fails to resolve aborts the walk with
    /// [`PathError::NotFound`]; remaining segments are not examined. A
    /// container-kind mismatch, an absent key, and an out-of-bounds index
    /// all report the same way: the path does not resolve against this
    /// tree.
    pub fn lookup(&self, path: &DotPath) -> Result<&'a Value, PathError> {
        let mut current = self.root;
        for segment in path.segments() {
            current = self.lookup_segment(segment, current)?;
        }
        Ok(current)
    }

    /// Applies one segment to the current value.
    fn lookup_segment(
        &self,
        segment: &PathSegment,
        data: &'a Value,
    ) -> Result<&'a Value, PathError> {
        match segment.kind() {
            ContainerKind::Map => {
                let members = data.as_object().ok_or(PathError::NotFound)?;
                members.get(segment.key()).ok_or(PathError::NotFound)
            }
            ContainerKind::Slice => {
                let items = data.as_array().ok_or(PathError::NotFound)?;
                let len = items.len() as isize;
                let mut index = segment.index();
                if index < 0 {
                    index += len;
                }
                if index < 0 || index >= len {
                    return Err(PathError::NotFound);
                }
                Ok(&items[index as usize])
            }
        }
    }
}
