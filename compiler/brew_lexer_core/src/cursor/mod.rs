//! Byte cursor over source text.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, so scanning loops terminate on the first out-of-range read
//! without separate bounds checks at every call site.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from EOF by comparing `pos` against the source length.
//! A null at `pos < len` is an interior null (error token); a read at
//! `pos >= len` is EOF.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when more bytes must be
/// searched for than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor over a source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// # Panics
    ///
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'a str) -> Self {
        Self::with_offset(source, 0)
    }

    /// Create a cursor at byte `offset`.
    ///
    /// An offset past the end, or inside a multi-byte character, is moved
    /// forward to the next character boundary (at most the end of input).
    pub fn with_offset(source: &'a str, offset: u32) -> Self {
        assert!(
            u32::try_from(source.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        let mut pos = (offset as usize).min(source.len());
        while !source.is_char_boundary(pos) {
            pos += 1;
        }
        Self {
            source,
            pos: to_u32(pos),
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos as usize + 2)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// The full character starting at the current position, if any.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos as usize..)?.chars().next()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        to_u32(self.source.len())
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` if `start..end` is out of range or splits a character.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, or the loop would spin at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next line break (`\n` or `\r`) or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += to_u32(offset),
            None => self.pos = self.source_len(),
        }
    }

    /// Advance past ordinary literal content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes are the closing `quote`, `\`, `\n` and `\r`.
    pub fn skip_to_literal_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        match earliest_of(primary, cr) {
            Some(off) => {
                self.pos += to_u32(off);
                self.current()
            }
            None => {
                self.pos = self.source_len();
                0
            }
        }
    }

    /// Advance past the `*/` that closes a block comment.
    ///
    /// Returns `false` (with the cursor at EOF) if there is none.
    pub fn eat_block_comment_tail(&mut self) -> bool {
        match memchr::memmem::find(self.remaining(), b"*/") {
            Some(off) => {
                self.pos += to_u32(off) + 2;
                true
            }
            None => {
                self.pos = self.source_len();
                false
            }
        }
    }

    /// Advance past horizontal whitespace (space, tab, form feed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\x0c'));
    }

    fn remaining(&self) -> &'a [u8] {
        self.source
            .as_bytes()
            .get(self.pos as usize..)
            .unwrap_or_default()
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
