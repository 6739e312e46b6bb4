//! Source positions and spans.
//!
//! A `Position` is the full location record the lexer maintains: the file
//! name (rewritable by line directives), the 1-based line number, the
//! absolute offset of the start of the current line, and the absolute byte
//! offset. Offsets are absolute over the whole input stream, never relative
//! to the chunk that happened to be buffered.

use std::fmt;
use std::sync::Arc;

/// A point in the input stream.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// File name, as given by the session or the last line directive.
    pub file: Arc<str>,
    /// 1-based line number.
    pub line: u32,
    /// Absolute offset of the first byte of the current line.
    pub bol: usize,
    /// Absolute byte offset.
    pub offset: usize,
}

impl Position {
    /// Position of the first byte of a file.
    pub fn start_of(file: impl Into<Arc<str>>) -> Self {
        Position {
            file: file.into(),
            line: 1,
            bol: 0,
            offset: 0,
        }
    }

    /// 0-based column, in bytes.
    #[inline]
    pub fn column(&self) -> usize {
        self.offset.saturating_sub(self.bol)
    }

    /// Same line and file, `n` bytes further on.
    #[inline]
    #[must_use]
    pub fn shifted(&self, n: usize) -> Position {
        Position {
            offset: self.offset + n,
            ..self.clone()
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column(), self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column())
    }
}

/// A source range `[start, end)`.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub fn point(pos: Position) -> Self {
        Span {
            end: pos.clone(),
            start: pos,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Span from the start of `self` to the end of `other`.
    #[inline]
    #[must_use]
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }

    /// Absolute byte range, for slicing a fully buffered source.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}:{}-{}",
                self.start.file,
                self.start.line,
                self.start.column(),
                self.end.column()
            )
        } else {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start.file,
                self.start.line,
                self.start.column(),
                self.end.line,
                self.end.column()
            )
        }
    }
}

#[cfg(test)]
mod tests;
