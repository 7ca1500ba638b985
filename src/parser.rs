//! Compiler from raw path strings to [`DotPath`] values.
//!
//! A path is cut into segments on unescaped `.` separators; each segment
//! is then compiled independently into a [`PathSegment`]. Compilation
//! fails on the first malformed segment and returns no partial path.

use crate::ast::{DotPath, PathSegment};
use crate::error::PathError;

/// Compiler for dot path strings.
pub struct Parser {
    input: String,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(path: &str) -> Self {
        Self {
            input: path.to_string(),
            position: 0,
        }
    }

    /// Compiles the path string into a [`DotPath`].
    pub fn parse(path: &str) -> Result<DotPath, PathError> {
        let mut parser = Parser::new(path);
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<DotPath, PathError> {
        if self.input.is_empty() {
            return Err(PathError::WrongPath {
                message: "empty path".to_string(),
            });
        }

        let mut segments = Vec::new();
        while !self.is_eof() {
            let raw = self.cut_segment();
            let segment = Self::compile_segment(raw)?;
            segments.push(segment);
        }
        Ok(DotPath::new(segments))
    }

    /// Checks if we've consumed the whole input.
    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Cuts the next raw segment off the input, honoring escaped separators.
    ///
    /// The cut text excludes the separator that ended it. A separator in
    /// final position is left unconsumed so the next cut yields an empty
    /// segment and compilation fails: trailing separators are invalid.
    fn cut_segment(&mut self) -> &str {
        let bytes = self.input.as_bytes();
        let start = self.position;
        let mut escaped = false;

        for idx in start..bytes.len() {
            if escaped {
                escaped = false;
            } else if bytes[idx] == b'\\' {
                escaped = true;
            } else if bytes[idx] == b'.' {
                if idx + 1 == bytes.len() {
                    self.position = idx;
                } else {
                    self.position = idx + 1;
                }
                return &self.input[start..idx];
            }
        }

        self.position = bytes.len();
        &self.input[start..]
    }

    /// Compiles a single raw segment.
    fn compile_segment(segment: &str) -> Result<PathSegment, PathError> {
        if segment.is_empty() {
            return Err(PathError::WrongPath {
                message: "empty path segment".to_string(),
            });
        }
        if let Some(index_text) = segment.strip_prefix('@') {
            let index = Self::resolve_index(index_text)?;
            return Ok(PathSegment::slice(Self::unescape(index_text), index));
        }
        Ok(PathSegment::map(Self::unescape(segment)))
    }

    /// Resolves an `@` segment's index text to a signed position.
    fn resolve_index(text: &str) -> Result<isize, PathError> {
        match text {
            "" => Err(PathError::InvalidIndex {
                text: text.to_string(),
            }),
            "first" => Ok(0),
            "last" => Ok(-1),
            _ => text.parse::<isize>().map_err(|_| PathError::InvalidIndex {
                text: text.to_string(),
            }),
        }
    }

    /// Removes escape markers, copying each escaped character literally.
    fn unescape(segment: &str) -> String {
        if !segment.contains('\\') {
            return segment.to_string();
        }

        let mut literal = String::with_capacity(segment.len());
        let mut escaped = false;
        for ch in segment.chars() {
            if escaped {
                escaped = false;
                literal.push(ch);
            } else if ch == '\\' {
                escaped = true;
            } else {
                literal.push(ch);
            }
        }
        literal
    }
}
