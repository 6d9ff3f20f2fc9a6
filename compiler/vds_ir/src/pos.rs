//! Source positions.
//!
//! Positions are line/column based: lines and columns both start at 1 and
//! columns count bytes. A position covers a single line; tokens never
//! span lines except unterminated strings and those keep the start line.

use std::fmt;

/// Location of a token or AST node in the source text.
///
/// `end_col` is inclusive, so a one-character token has
/// `start_col == end_col`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SourcePos {
    pub line: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl SourcePos {
    /// Position used for nodes synthesized outside of parsing.
    pub const DUMMY: SourcePos = SourcePos {
        line: 0,
        start_col: 0,
        end_col: 0,
    };

    #[inline]
    pub const fn new(line: u32, start_col: u32, end_col: u32) -> Self {
        SourcePos {
            line,
            start_col,
            end_col,
        }
    }

    /// Number of columns covered, at least one.
    #[inline]
    pub const fn width(&self) -> u32 {
        if self.end_col >= self.start_col {
            self.end_col - self.start_col + 1
        } else {
            1
        }
    }

    /// Position covering `self` and `other`.
    ///
    /// When the two positions are on different lines the result keeps the
    /// line and start of `self`, since a position cannot cover two lines.
    #[must_use]
    pub fn merge(self, other: SourcePos) -> SourcePos {
        if self.line == other.line {
            SourcePos {
                line: self.line,
                start_col: self.start_col.min(other.start_col),
                end_col: self.end_col.max(other.end_col),
            }
        } else {
            self
        }
    }
}

impl fmt::Debug for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.line, self.start_col, self.end_col)
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.start_col)
    }
}
