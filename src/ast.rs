//! Compiled representation of dot path expressions.

use std::fmt;

use crate::error::PathError;

/// Which container shape a path segment traverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A string-keyed object.
    Map,
    /// An ordered array addressed by index.
    Slice,
}

/// A single compiled step of a dot path.
///
/// For map segments `key` is the unescaped member name and `index` is
/// unused. For slice segments `index` carries the resolved position
/// (negative values count from the end, `-1` being the last element) and
/// `key` keeps the index text as written, e.g. `"last"` or `"-100"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub(crate) key: String,
    pub(crate) index: isize,
    pub(crate) kind: ContainerKind,
}

impl PathSegment {
    pub(crate) fn map(key: String) -> Self {
        Self {
            key,
            index: 0,
            kind: ContainerKind::Map,
        }
    }

    pub(crate) fn slice(key: String, index: isize) -> Self {
        Self {
            key,
            index,
            kind: ContainerKind::Slice,
        }
    }

    /// Returns the unescaped key (map segments) or the index text (slice
    /// segments).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the array index this segment addresses. Meaningful only for
    /// slice segments.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Returns the container kind this segment expects at lookup time.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Returns true if this segment addresses an object member.
    pub fn is_map(&self) -> bool {
        self.kind == ContainerKind::Map
    }

    /// Returns true if this segment addresses an array element.
    pub fn is_slice(&self) -> bool {
        self.kind == ContainerKind::Slice
    }
}

impl fmt::Display for PathSegment {
    /// Renders the segment as canonical path text, re-escaping characters
    /// that would otherwise act as separator, sigil, or escape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ContainerKind::Slice => write!(f, "@{}", self.key),
            ContainerKind::Map => {
                for (pos, ch) in self.key.chars().enumerate() {
                    let needs_escape = match ch {
                        '\\' | '.' => true,
                        // The sigil only has meaning at the start of a segment.
                        '@' => pos == 0,
                        _ => false,
                    };
                    if needs_escape {
                        write!(f, "\\{}", ch)?;
                    } else {
                        write!(f, "{}", ch)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// A complete compiled dot path: a non-empty sequence of segments.
///
/// Produced by [`DotPath::compile`]; the compiler never yields an empty
/// path, so every `DotPath` addresses at least one traversal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    segments: Vec<PathSegment>,
}

impl DotPath {
    pub(crate) fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Compiles a raw path string into its segment descriptors.
    ///
    /// # Example
    ///
    /// ```
    /// use dotpath::DotPath;
    ///
    /// let path = DotPath::compile("servers.@last.host").unwrap();
    /// assert_eq!(path.len(), 3);
    /// ```
    pub fn compile(path: &str) -> Result<Self, PathError> {
        crate::parser::Parser::parse(path)
    }

    /// Returns the compiled segments in traversal order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments. Compiled paths are never
    /// empty; this exists for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, segment) in self.segments.iter().enumerate() {
            if pos > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
