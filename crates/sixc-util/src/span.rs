//! Source location tracking.
//!
//! The compiler operates on a single source string (see the crate-level
//! docs), so a span only needs a byte range plus the line/column of its
//! start — there is no multi-file `SourceMap` here.

/// A half-open byte range into the source text, with the 1-based
/// line/column of its start for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0, line: 0, column: 0 };

    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self { start, end, line, column }
    }

    pub const fn point(line: u32, column: u32) -> Self {
        Self { start: 0, end: 0, line, column }
    }

    /// Span covering both `self` and `other`, in source order.
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
