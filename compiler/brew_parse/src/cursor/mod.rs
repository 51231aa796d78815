//! Token cursor for navigating the token stream.
//!
//! Pulls tokens lazily from a [`Lexer`] and caches every token it has seen,
//! so [`mark`](TokenCursor::mark) / [`reset`](TokenCursor::reset)
//! backtracking replays cached tokens instead of lexing them again.

use brew_ir::{Span, Token, TokenKind};
use brew_lexer::{LexError, Lexer};
use tracing::trace;

/// A saved cursor position, restored with [`TokenCursor::reset`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Mark(usize);

/// Buffered, backtrackable cursor over a token stream.
///
/// The last token is always `Eof`; peeking past it keeps returning that
/// `Eof`. Consuming `Eof` is a contract violation.
pub struct TokenCursor<'src> {
    lexer: Lexer<'src>,
    /// Every token pulled so far, indexed by position.
    tokens: Vec<Token>,
    /// Lexer errors for the tokens in `tokens`, not yet handed out.
    lex_errors: Vec<LexError>,
    pos: usize,
}

impl<'src> TokenCursor<'src> {
    /// Create a cursor at the first token produced by `lexer`.
    pub fn new(lexer: Lexer<'src>) -> Self {
        let mut cursor = TokenCursor {
            lexer,
            tokens: Vec::new(),
            lex_errors: Vec::new(),
            pos: 0,
        };
        cursor.fill(0);
        cursor
    }

    /// Shorthand for a cursor over `source` from its first byte.
    pub fn from_source(source: &'src str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// The source text behind the tokens.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Byte offset the underlying lexer started from.
    #[inline]
    pub fn start_offset(&self) -> u32 {
        self.lexer.start_offset()
    }

    /// Make sure the token at absolute index `index` is buffered, unless
    /// `Eof` comes first.
    fn fill(&mut self, index: usize) {
        while self.tokens.len() <= index {
            if self.tokens.last().is_some_and(|t| t.kind == TokenKind::Eof) {
                return;
            }
            // The lexer always ends with `Eof`, so this only stops there.
            let Some(token) = self.lexer.next() else {
                return;
            };
            self.tokens.push(token);
            self.lex_errors.extend(self.lexer.take_errors());
        }
    }

    /// Look `k` tokens ahead without consuming. `peek(0)` is the current
    /// token; anything past the end is the `Eof` token.
    pub fn peek(&mut self, k: usize) -> Token {
        let index = self.pos + k;
        self.fill(index);
        // Never empty: the lexer yields at least `Eof`.
        let last = self.tokens.len() - 1;
        self.tokens[index.min(last)]
    }

    /// Kind of the token `k` positions ahead.
    #[inline]
    pub fn peek_kind(&mut self, k: usize) -> TokenKind {
        self.peek(k).kind
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> Token {
        // `pos` is always buffered: `fill` runs on construction and after
        // every `advance`.
        self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token, or an empty span at the
    /// current token when nothing has been consumed.
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(self.current_span().start)
        }
    }

    /// Consume and return the current token.
    ///
    /// # Panics
    ///
    /// Panics if the current token is `Eof`. Callers check the current kind
    /// before advancing.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        assert!(
            token.kind != TokenKind::Eof,
            "advance past end of token stream at {}",
            token.span
        );
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        self.fill(self.pos);
        token
    }

    /// Save the current position.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Return to a saved position. Tokens consumed since the mark stay
    /// buffered and are replayed without re-lexing.
    pub fn reset(&mut self, mark: Mark) {
        debug_assert!(mark.0 < self.tokens.len(), "mark from another cursor");
        trace!(from = self.pos, to = mark.0, "reset");
        self.pos = mark.0;
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of tokens pulled from the lexer so far.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::Eof && self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Take the lexer errors for all tokens buffered so far. Each error is
    /// handed out once.
    pub fn take_lex_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.lex_errors)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
