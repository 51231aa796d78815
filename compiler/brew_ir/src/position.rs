//! Line/column source positions.

use std::fmt;

/// A resolved point in the source: 1-based line and column plus byte offset.
///
/// Columns count characters, not bytes, so a position inside a line with
/// multi-byte characters still matches what an editor shows.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl SourcePosition {
    /// Position of the first byte of a file.
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        SourcePosition {
            line,
            column,
            offset,
        }
    }

    /// Advance this position across `text`, which must start at `self.offset`.
    ///
    /// `\r\n` and lone `\n` both start a new line; a lone `\r` does not.
    #[must_use]
    pub fn advanced_by(self, text: &str) -> SourcePosition {
        let mut line = self.line;
        let mut column = self.column;
        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "token text never exceeds the u32 source length"
        )]
        let len = text.len() as u32;
        SourcePosition {
            line,
            column,
            offset: self.offset + len,
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
