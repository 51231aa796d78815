//! Lexer for Brew.
//!
//! Cooks the `(RawTag, len)` stream of [`brew_lexer_core`] into classified
//! [`Token`]s with spans and line/column positions.
//!
//! # Architecture
//!
//! - `brew_lexer_core::RawScanner` finds token boundaries
//! - `cooker` resolves keywords, validates literals, records [`LexError`]s
//! - [`Lexer`] tracks positions, filters trivia and ends with one `Eof`
//!
//! Lexing is a pure function of the source text and starting offset.

mod cooker;
mod escape;
mod keywords;
mod lex_error;
mod lexer;
mod number;

pub use escape::unescape;
pub use lex_error::{LexError, LexErrorKind, NumberError};
pub use lexer::Lexer;

use brew_ir::Token;

/// Output of [`lex`]: every significant token plus the errors found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Tokens in source order, ending with `Eof`.
    pub tokens: Vec<Token>,
    /// Errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a whole source text eagerly, skipping trivia.
pub fn lex(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.take_errors(),
    }
}

/// Lex a whole source text eagerly, keeping whitespace and comments.
pub fn lex_with_trivia(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source).keep_trivia(true);
    let tokens = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.take_errors(),
    }
}
