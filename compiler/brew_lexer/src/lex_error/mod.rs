//! Lexer error types.
//!
//! Errors carry WHERE (`span`) and WHAT (`kind`). Conversion to a
//! [`Diagnostic`] attaches the error code and a rendered message.

use std::fmt;

use brew_diagnostic::{Diagnostic, ErrorCode};
use brew_ir::Span;

/// A lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === String/Char Errors ===
    /// Missing closing `"` before the end of the line.
    UnterminatedString,
    /// Missing closing `'` before the end of the line.
    UnterminatedChar,
    /// Empty char literal `''`.
    EmptyCharLiteral,
    /// Multiple characters in char literal `'ab'`.
    MultiCharLiteral,
    /// Unknown escape such as `\q`, or a malformed `\u` escape.
    InvalidEscape { escape: String },

    // === Numeric Errors ===
    /// Malformed numeric literal.
    InvalidNumber(NumberError),

    // === Character Errors ===
    /// Character that cannot start any token.
    IllegalCharacter { ch: char },
    /// `/*` without a closing `*/`.
    UnterminatedComment,
}

/// Why a numeric literal was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NumberError {
    /// A digit outside the literal's radix (e.g. `09`, `0b2`, `0xG`).
    InvalidDigit { digit: char, radix: u8 },
    /// Radix prefix or mantissa without digits (e.g. `0x`, `0b`).
    MissingDigits,
    /// Exponent marker without digits (e.g. `1e`, `1.5e+`).
    EmptyExponent,
    /// `_` at the start or end of a digit run, or next to `.`/`e`.
    MisplacedUnderscore,
    /// Trailing characters that are not a valid suffix (e.g. `1x`, `1.5L`).
    InvalidSuffix,
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::InvalidDigit { digit, radix } => {
                let base = match radix {
                    2 => "binary",
                    8 => "octal",
                    16 => "hexadecimal",
                    _ => "decimal",
                };
                write!(f, "invalid digit `{digit}` in {base} literal")
            }
            NumberError::MissingDigits => write!(f, "missing digits"),
            NumberError::EmptyExponent => write!(f, "exponent has no digits"),
            NumberError::MisplacedUnderscore => {
                write!(f, "`_` must appear between digits")
            }
            NumberError::InvalidSuffix => write!(f, "invalid suffix"),
        }
    }
}

impl LexError {
    #[cold]
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        Self { span, kind }
    }

    /// The diagnostic code this error is reported under.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString
            | LexErrorKind::UnterminatedChar
            | LexErrorKind::EmptyCharLiteral
            | LexErrorKind::MultiCharLiteral => ErrorCode::UnterminatedLiteral,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::InvalidEscape,
            LexErrorKind::InvalidNumber(_) => ErrorCode::InvalidNumericLiteral,
            LexErrorKind::IllegalCharacter { .. } => ErrorCode::IllegalCharacter,
            LexErrorKind::UnterminatedComment => ErrorCode::UnterminatedComment,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
            LexErrorKind::UnterminatedChar => "unterminated character literal".to_string(),
            LexErrorKind::EmptyCharLiteral => "empty character literal".to_string(),
            LexErrorKind::MultiCharLiteral => {
                "character literal holds more than one character".to_string()
            }
            LexErrorKind::InvalidEscape { escape } => {
                format!("invalid escape sequence `{escape}`")
            }
            LexErrorKind::InvalidNumber(reason) => {
                format!("invalid numeric literal: {reason}")
            }
            LexErrorKind::IllegalCharacter { ch } => {
                format!("illegal character `{}`", ch.escape_debug())
            }
            LexErrorKind::UnterminatedComment => "unterminated block comment".to_string(),
        }
    }

    /// Convert into a reportable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let note = match &self.kind {
            LexErrorKind::UnterminatedString => Some("add a closing `\"` on the same line"),
            LexErrorKind::UnterminatedChar => Some("add a closing `'` on the same line"),
            LexErrorKind::InvalidEscape { .. } => {
                Some(r#"valid escapes are \b \t \n \f \r \" \' \\, octal \0-\377 and \uXXXX"#)
            }
            LexErrorKind::UnterminatedComment => Some("add `*/` to close the comment"),
            _ => None,
        };
        let diagnostic = Diagnostic::new(self.code())
            .with_message(self.message())
            .with_span(self.span);
        match note {
            Some(note) => diagnostic.with_note(note),
            None => diagnostic,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.span)
    }
}
