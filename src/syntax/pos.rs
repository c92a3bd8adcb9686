//! Source positions.
//!
//! Byte offsets are used everywhere inside the parser. They are converted to
//! [`Pos`] handles only at the boundary, and to [`Position`] (line/column)
//! only for diagnostics.

use serde::Serialize;
use std::fmt;

/// A file-cumulative position handle.
///
/// The value is the byte offset plus one, which is the scale a fresh file set
/// assigns to the first file it sees. Zero is reserved for "no position".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Pos(u32);

impl Pos {
    pub const NONE: Pos = Pos(0);

    pub fn from_offset(offset: usize) -> Self {
        Pos(offset as u32 + 1)
    }

    pub fn offset(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.0 as usize - 1)
        } else {
            None
        }
    }

    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A half-open range of byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering `self` through `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start, other.end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn start_pos(&self) -> Pos {
        Pos::from_offset(self.start)
    }

    pub fn end_pos(&self) -> Pos {
        Pos::from_offset(self.end)
    }
}

/// Line/column location used when printing diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub filename: String,
    /// 1-based
    pub line: usize,
    /// 1-based, counted in bytes
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filename.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.filename, self.line, self.column)
        }
    }
}

/// Offsets of the first byte of every line in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    filename: String,
    line_starts: Vec<usize>,
}

impl LineTable {
    pub fn new(filename: impl Into<String>, source: impl AsRef<[u8]>) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .as_ref()
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            filename: filename.into(),
            line_starts,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        Position {
            filename: self.filename.clone(),
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_is_offset_plus_one() {
        assert_eq!(Pos::from_offset(0).get(), 1);
        assert_eq!(Pos::from_offset(41).get(), 42);
        assert_eq!(Pos::from_offset(41).offset(), Some(41));
        assert_eq!(Pos::NONE.offset(), None);
        assert!(!Pos::default().is_valid());
    }

    #[test]
    fn test_span_positions() {
        let span = Span::new(8, 12);
        assert_eq!(span.start_pos().get(), 9);
        assert_eq!(span.end_pos().get(), 13);
        assert_eq!(span.text("package main"), "main");
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_line_table_positions() {
        let table = LineTable::new("a.go", "package a\n\nfunc F() {}\n");
        assert_eq!(table.line_count(), 4);

        let position = table.position(11);
        assert_eq!(position.line, 3);
        assert_eq!(position.column, 1);
        assert_eq!(position.to_string(), "a.go:3:1");

        assert_eq!(table.position(0).to_string(), "a.go:1:1");
        assert_eq!(table.position(8).column, 9);
    }

    #[test]
    fn test_position_without_filename() {
        let table = LineTable::new("", "x\ny");
        assert_eq!(table.position(2).to_string(), "2:1");
    }
}
