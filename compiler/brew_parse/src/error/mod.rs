//! Parse error type.
//!
//! Grammar routines return `Result<_, ParseError>`; the enclosing list loop
//! reports the error and resynchronizes. Errors never leave the parser:
//! they become [`Diagnostic`]s in the [`ParseResult`](crate::ParseResult).

use std::fmt;

use brew_diagnostic::{Diagnostic, ErrorCode};
use brew_ir::{Span, Token, TokenCategory, TokenKind};

/// A syntax error raised by a grammar routine.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Optional hint about how to fix or what was skipped.
    pub note: Option<String>,
    /// Raised at a lexer `Error` token, which already produced a diagnostic.
    at_lex_error: bool,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            note: None,
            at_lex_error: false,
        }
    }

    /// `expected {what}, found {found}` at `found`.
    ///
    /// If `found` is a lexer `Error` token, the error is marked as already
    /// reported so malformed literals yield a single diagnostic.
    #[cold]
    pub fn expected(code: ErrorCode, what: &str, found: Token) -> Self {
        let mut error = ParseError::new(
            code,
            format!("expected {what}, found {}", describe(found.kind)),
            found.span,
        );
        error.at_lex_error = found.kind == TokenKind::Error;
        error
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// True if the lexer already reported the problem at this location.
    pub fn is_reported(&self) -> bool {
        self.at_lex_error
    }

    /// Convert to a diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::new(self.code)
            .with_message(self.message.clone())
            .with_span(self.span);
        match &self.note {
            Some(note) => diagnostic.with_note(note.clone()),
            None => diagnostic,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}

/// How a token kind reads in an "expected X, found Y" message.
///
/// Fixed tokens are quoted (`` `;` ``, `` `class` ``); open-ended kinds use
/// their name (`identifier`, `end of file`).
pub fn describe(kind: TokenKind) -> String {
    match kind.category() {
        TokenCategory::Keyword | TokenCategory::Operator | TokenCategory::Punctuation => {
            format!("`{}`", kind.display_name())
        }
        _ => kind.display_name().to_string(),
    }
}
