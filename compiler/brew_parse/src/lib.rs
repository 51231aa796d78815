//! Recursive descent parser for Brew.
//!
//! Consumes a [`TokenCursor`] and produces a [`ParseResult`]: an arena
//! [`SyntaxTree`] plus source-ordered [`Diagnostic`]s. Malformed input never
//! aborts the parse; failing productions are reported, the parser
//! resynchronizes at a statement or declaration boundary, and an `Error`
//! node stands in for the skipped tokens.
//!
//! # Entry points
//!
//! - [`parse`]: parse a whole source text
//! - [`parse_with_options`]: parse with a file name and starting offset
//! - [`parse_compilation_unit`]: parse from an existing cursor

mod cursor;
mod error;
mod exceptions;
mod grammar;
mod recovery;
mod stack;

pub use cursor::{Mark, TokenCursor};
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet};

use brew_diagnostic::{Diagnostic, DiagnosticCollector, ErrorCode};
use brew_ir::{Name, NodeId, NodeKind, Span, SyntaxTree, Token, TokenKind, TreeBuilder};
use brew_lexer::Lexer;
use tracing::debug;

/// Parser state for one compilation unit.
pub(crate) struct Parser<'src> {
    cursor: TokenCursor<'src>,
    builder: TreeBuilder,
    diagnostics: DiagnosticCollector,
}

impl<'src> Parser<'src> {
    fn new(cursor: TokenCursor<'src>) -> Self {
        Parser {
            cursor,
            builder: TreeBuilder::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    // ─── Cursor delegation ─────────────────────────────────────────

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_kind(&mut self, k: usize) -> TokenKind {
        self.cursor.peek_kind(k)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Source text of a token.
    #[inline]
    fn text(&self, token: Token) -> &'src str {
        token.text(self.cursor.source())
    }

    // ─── Spans ─────────────────────────────────────────────────────

    /// Start offset of the current token.
    #[inline]
    fn start(&self) -> u32 {
        self.current_span().start
    }

    /// Span from `start` to the end of the last consumed token.
    ///
    /// Empty at `start` when nothing was consumed since.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.previous_span().end.max(start))
    }

    // ─── Expectations ──────────────────────────────────────────────

    /// Consume a token of `kind` or fail with `UnexpectedToken`.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(
                ErrorCode::UnexpectedToken,
                &error::describe(kind),
                self.current(),
            ))
        }
    }

    /// Consume the closing delimiter matching `open`, or fail with
    /// `UnbalancedDelimiter` pointing back at the opener.
    fn expect_closing(&mut self, kind: TokenKind, open: Token) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let err = ParseError::expected(
            ErrorCode::UnbalancedDelimiter,
            &error::describe(kind),
            self.current(),
        );
        Err(err.with_note(format!(
            "unclosed {} opened at {}",
            error::describe(open.kind),
            open.start
        )))
    }

    /// Consume an identifier and intern its text.
    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if self.check(TokenKind::Ident) {
            let token = self.advance();
            let name = self.builder.intern(self.text(token));
            Ok((name, token.span))
        } else {
            Err(ParseError::expected(
                ErrorCode::ExpectedIdentifier,
                "identifier",
                self.current(),
            ))
        }
    }

    // ─── Tree assembly ─────────────────────────────────────────────

    #[inline]
    fn alloc(&mut self, kind: NodeKind, span: Span, children: &[NodeId]) -> NodeId {
        self.builder.alloc(kind, span, children)
    }

    #[inline]
    fn node_span(&self, id: NodeId) -> Span {
        self.builder.span(id)
    }

    #[inline]
    fn intern(&mut self, text: &str) -> Name {
        self.builder.intern(text)
    }

    // ─── Diagnostics & recovery ────────────────────────────────────

    /// Record a syntax error unless the lexer already reported it.
    fn report(&mut self, err: &ParseError) {
        if err.is_reported() {
            debug!(span = %err.span, "suppressed error at lexer error token");
            return;
        }
        debug!(code = %err.code, span = %err.span, message = %err.message, "syntax error");
        self.diagnostics.report(err.to_diagnostic());
    }

    /// Record a warning. Warnings never affect the tree.
    fn warn(&mut self, code: ErrorCode, message: String, span: Span, note: Option<String>) {
        let diagnostic = Diagnostic::warning(code).with_message(message).with_span(span);
        self.diagnostics.report(match note {
            Some(note) => diagnostic.with_note(note),
            None => diagnostic,
        });
    }

    /// Panic-mode recovery for a list loop.
    ///
    /// Reports `err`, skips to the next boundary in `recovery` and returns
    /// an `Error` node covering everything from `start` that was skipped.
    /// `loop_pos` is the cursor position when the failing item began; if
    /// synchronization made no progress from there, one token is skipped
    /// so the loop cannot spin.
    fn recover(&mut self, err: &ParseError, start: u32, loop_pos: usize, recovery: TokenSet) -> NodeId {
        self.report(err);
        recovery::synchronize(&mut self.cursor, recovery);
        if self.cursor.position() == loop_pos && !self.is_at_end() {
            self.advance();
            recovery::synchronize(&mut self.cursor, recovery);
        }
        let span = self.span_from(start);
        debug!(%span, "recovered");
        self.alloc(NodeKind::Error, span, &[])
    }

    /// Drain lexer errors into the diagnostics and assemble the result.
    fn finish(mut self, root: NodeId, file_name: Option<String>) -> ParseResult {
        for lex_error in self.cursor.take_lex_errors() {
            self.diagnostics.report(lex_error.into_diagnostic());
        }
        ParseResult {
            tree: self.builder.finish(root),
            diagnostics: self.diagnostics.into_vec(),
            file_name,
        }
    }
}

/// Options for [`parse_with_options`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Name of the source, used only when rendering diagnostics.
    pub file_name: Option<String>,
    /// Byte offset to start parsing from.
    pub offset: u32,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// Output of a parse: the (possibly partial) tree and every diagnostic.
#[derive(Clone, Debug)]
pub struct ParseResult {
    pub tree: SyntaxTree,
    /// Diagnostics in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Copied from [`ParseOptions::file_name`].
    pub file_name: Option<String>,
}

impl ParseResult {
    /// True if any diagnostic is an error. Warnings do not count.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// True if the parse produced no diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// Diagnostics carrying `code`.
    pub fn with_code(&self, code: ErrorCode) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }
}

/// Parse a compilation unit from `cursor`.
pub fn parse_compilation_unit(cursor: TokenCursor<'_>) -> ParseResult {
    let mut parser = Parser::new(cursor);
    let root = parser.parse_compilation_unit();
    parser.finish(root, None)
}

/// Parse a whole source text.
pub fn parse(source: &str) -> ParseResult {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse `source` starting at `options.offset`.
#[tracing::instrument(level = "debug", skip_all, fields(
    file = options.file_name.as_deref().unwrap_or("<input>"),
    len = source.len(),
))]
pub fn parse_with_options(source: &str, options: &ParseOptions) -> ParseResult {
    let cursor = TokenCursor::new(Lexer::with_offset(source, options.offset));
    let mut parser = Parser::new(cursor);
    let root = parser.parse_compilation_unit();
    let result = parser.finish(root, options.file_name.clone());
    debug!(
        nodes = result.tree.len(),
        diagnostics = result.diagnostics.len(),
        "parsed"
    );
    result
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
