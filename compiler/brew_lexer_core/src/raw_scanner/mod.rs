//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! with zero heap allocation. It does not resolve keywords, validate
//! escapes, or check numeric literal shapes; those are deferred to the
//! cooking layer in `brew_lexer`.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. A read past
//! the end yields `0x00`, which dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\x0c' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.op_or_assign(start, RawTag::Star, RawTag::StarEq),
            b'%' => self.op_or_assign(start, RawTag::Percent, RawTag::PercentEq),
            b'^' => self.op_or_assign(start, RawTag::Caret, RawTag::CaretEq),
            b'=' => self.op_or_assign(start, RawTag::Eq, RawTag::EqEq),
            b'!' => self.op_or_assign(start, RawTag::Bang, RawTag::NotEq),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'<' => self.less(start),
            b'>' => self.single(start, RawTag::Greater),
            b'~' => self.single(start, RawTag::Tilde),
            b'?' => self.single(start, RawTag::Question),
            b':' => self.colon(start),
            b'.' => self.dot(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            b'@' => self.single(start, RawTag::At),
            0x80..=0xFF => self.non_ascii(start),
            // Control characters (excluding \t, \n, \x0c, \r), DEL, and
            // ASCII punctuation with no meaning (`#`, `\`, backtick)
            _ => self.invalid_char(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte
            self.cursor.advance();
            self.token(start, RawTag::InvalidChar)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Newline)
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance(); // consume '*'
                if self.cursor.eat_block_comment_tail() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedBlockComment)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::SlashEq)
            }
            _ => self.token(start, RawTag::Slash),
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first char (already validated)
        self.eat_ident_continue();
        self.token(start, RawTag::Ident)
    }

    /// Consume identifier continuation characters, including non-ASCII
    /// letters and digits.
    fn eat_ident_continue(&mut self) {
        loop {
            self.cursor.eat_while(is_ident_continue);
            match self.cursor.current_char() {
                Some(c) if !c.is_ascii() && c.is_alphanumeric() => self.cursor.advance_char(),
                _ => break,
            }
        }
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        match self.cursor.current_char() {
            Some(c) if c.is_alphabetic() => {
                self.cursor.advance_char();
                self.eat_ident_continue();
                self.token(start, RawTag::Ident)
            }
            _ => self.invalid_char(start),
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `op` or `op=`.
    fn op_or_assign(&mut self, start: u32, op: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, assign)
        } else {
            self.token(start, op)
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'+' => self.single(start, RawTag::PlusPlus),
            b'=' => self.single(start, RawTag::PlusEq),
            _ => self.token(start, RawTag::Plus),
        }
    }

    fn minus(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'-' => self.single(start, RawTag::MinusMinus),
            b'=' => self.single(start, RawTag::MinusEq),
            b'>' => self.single(start, RawTag::Arrow),
            _ => self.token(start, RawTag::Minus),
        }
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'&' => self.single(start, RawTag::AmpAmp),
            b'=' => self.single(start, RawTag::AmpEq),
            _ => self.token(start, RawTag::Amp),
        }
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'|' => self.single(start, RawTag::PipePipe),
            b'=' => self.single(start, RawTag::PipeEq),
            _ => self.token(start, RawTag::Pipe),
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.single(start, RawTag::LessEq),
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.single(start, RawTag::ShlEq)
                } else {
                    self.token(start, RawTag::Shl)
                }
            }
            _ => self.token(start, RawTag::Less),
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b':' {
            self.single(start, RawTag::ColonColon)
        } else {
            self.token(start, RawTag::Colon)
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            // `.5`, `.5e3f`
            self.cursor.advance();
            self.eat_decimal_digits();
            self.eat_exponent();
            self.eat_suffix_run();
            return self.token(start, RawTag::Float);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::Ellipsis);
        }
        self.single(start, RawTag::Dot)
    }

    // ─── Numbers ───────────────────────────────────────────────────

    /// Scan a number-shaped run.
    ///
    /// Consumes the longest prefix that could belong to a numeric literal,
    /// including any trailing letters and underscores, so `12abc` or `0x`
    /// stays one token for the cooking layer to reject as a whole.
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
            self.cursor.advance();
            self.eat_suffix_run();
            return self.token(start, RawTag::HexInt);
        }
        if first == b'0' && matches!(self.cursor.current(), b'b' | b'B') {
            self.cursor.advance();
            self.eat_suffix_run();
            return self.token(start, RawTag::BinInt);
        }

        self.eat_decimal_digits();
        let mut is_float = false;

        if self.cursor.current() == b'.' && self.fraction_follows() {
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
            is_float = true;
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.eat_exponent();
            is_float = true;
        }
        self.eat_suffix_run();
        if is_float {
            self.token(start, RawTag::Float)
        } else {
            self.token(start, RawTag::Int)
        }
    }

    /// Whether the `.` after an integer part starts a fraction.
    ///
    /// `1.5`, `1.`, `1.e3` and `1.f` are floats; `1..` and `1.foo` are not.
    fn fraction_follows(&self) -> bool {
        match self.cursor.peek() {
            b'0'..=b'9' => true,
            b'e' | b'E' => matches!(self.cursor.peek2(), b'0'..=b'9' | b'+' | b'-'),
            b'f' | b'F' | b'd' | b'D' => !is_ident_continue(self.cursor.peek2()),
            b'.' => false,
            b => b < 0x80 && !is_ident_continue(b),
        }
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn eat_exponent(&mut self) {
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
    }

    /// Consume trailing letters, digits and underscores (suffixes and junk).
    fn eat_suffix_run(&mut self) {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    }

    // ─── String & Char Literals ────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        if self.quoted(b'"') {
            self.token(start, RawTag::String)
        } else {
            self.token(start, RawTag::UnterminatedString)
        }
    }

    fn char_literal(&mut self, start: u32) -> RawToken {
        if self.quoted(b'\'') {
            self.token(start, RawTag::Char)
        } else {
            self.token(start, RawTag::UnterminatedChar)
        }
    }

    /// Scan a quoted literal body after the opening quote.
    ///
    /// Returns `true` if the closing quote was consumed. On a line break or
    /// EOF, stops before the break and returns `false`.
    fn quoted(&mut self, quote: u8) -> bool {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    match self.cursor.current() {
                        b'\n' | b'\r' => return false,
                        0 if self.cursor.is_eof() => return false,
                        _ => self.cursor.advance_char(),
                    }
                }
                b'\n' | b'\r' => return false,
                0 => return false,
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return true;
                }
            }
        }
    }

    // ─── Error tokens ──────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidChar)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for ASCII identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, underscore and dollar.
/// The null byte maps to `false`, terminating loops at EOF.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is an ASCII identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: scan a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    RawScanner::new(Cursor::new(source)).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
