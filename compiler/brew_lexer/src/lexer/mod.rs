//! The token iterator.

use brew_ir::{SourcePosition, Span, Token, TokenKind};
use brew_lexer_core::{Cursor, RawScanner};

use crate::cooker::TokenCooker;
use crate::lex_error::LexError;

/// Lazy, restartable token iterator over one source text.
///
/// Yields classified [`Token`]s and ends with exactly one
/// [`TokenKind::Eof`]; after that, `next()` returns `None`. Whitespace and
/// comments are skipped unless [`keep_trivia`](Self::keep_trivia) is set.
///
/// Malformed input never stops the iterator: it produces a
/// [`TokenKind::Error`] token (or keeps the literal token, for invalid
/// escapes) and records a [`LexError`].
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    scanner: RawScanner<'src>,
    cooker: TokenCooker<'src>,
    start_offset: u32,
    start_position: SourcePosition,
    position: SourcePosition,
    keep_trivia: bool,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Lex `source` from its first byte.
    ///
    /// # Panics
    ///
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'src str) -> Self {
        Self::with_offset(source, 0)
    }

    /// Lex `source` starting at byte `offset`.
    ///
    /// An offset inside a multi-byte character moves forward to the next
    /// character boundary; an offset past the end yields only `Eof`. Token
    /// positions are still reported relative to the start of `source`.
    pub fn with_offset(source: &'src str, offset: u32) -> Self {
        let scanner = RawScanner::new(Cursor::with_offset(source, offset));
        let start_offset = scanner.pos();
        let start_position =
            SourcePosition::START.advanced_by(source.get(..start_offset as usize).unwrap_or(""));
        Lexer {
            source,
            scanner,
            cooker: TokenCooker::new(source),
            start_offset,
            start_position,
            position: start_position,
            keep_trivia: false,
            finished: false,
        }
    }

    /// Surface whitespace and comments as `Whitespace` / `Comment` tokens.
    #[must_use]
    pub fn keep_trivia(mut self, keep: bool) -> Self {
        self.keep_trivia = keep;
        self
    }

    /// Rewind to the starting offset and forget recorded errors.
    pub fn restart(&mut self) {
        self.scanner = RawScanner::new(Cursor::with_offset(self.source, self.start_offset));
        self.cooker.clear();
        self.position = self.start_position;
        self.finished = false;
    }

    /// The source text being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset lexing started from, after snapping to a character
    /// boundary.
    pub fn start_offset(&self) -> u32 {
        self.start_offset
    }

    /// Errors recorded for the tokens produced so far.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    /// Take the errors recorded so far, leaving the list empty.
    ///
    /// Calling this after every pulled token hands each error out exactly
    /// once, in source order.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        self.cooker.take_errors()
    }

    /// Produce the next token, trivia included.
    fn next_raw(&mut self) -> Token {
        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        let span = Span::new(start, start + raw.len);
        let kind = self.cooker.cook(raw.tag, span);
        let begin = self.position;
        self.position = begin.advanced_by(span.text(self.source));
        Token::new(kind, span, begin, self.position)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            let token = self.next_raw();
            if token.kind == TokenKind::Eof {
                self.finished = true;
                return Some(token);
            }
            if self.keep_trivia || !token.kind.is_trivia() {
                return Some(token);
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("offset", &self.scanner.pos())
            .field("position", &self.position)
            .field("keep_trivia", &self.keep_trivia)
            .field("errors", &self.cooker.errors().len())
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
