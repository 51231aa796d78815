//! Error codes for all parser-core diagnostics.
//!
//! Each code has a stable identifier (e.g. `E1001`) whose first digit names
//! the phase that reports it. Warnings use a `W` prefix.

use std::fmt;

/// Broad classification of an [`ErrorCode`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// Malformed characters or literals found by the lexer.
    Lex,
    /// Token sequences that do not match the grammar.
    Syntax,
    /// Grammatical but suspicious constructs found while parsing.
    Semantic,
}

/// Error codes for all diagnostics.
///
/// Format: `E####` / `W####` where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - W2xxx: Parser-detected semantic warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// String or character literal not closed before the end of the line
    UnterminatedLiteral,
    /// Character that cannot start any token
    IllegalCharacter,
    /// Malformed integer or floating-point literal
    InvalidNumericLiteral,
    /// Unknown escape sequence inside a string or character literal
    InvalidEscape,
    /// Block comment not closed before end of file
    UnterminatedComment,

    // Parser Errors (E1xxx)
    /// Token that cannot appear here
    UnexpectedToken,
    /// Expected the start of an expression
    ExpectedExpression,
    /// Expected a type reference
    ExpectedType,
    /// Expected an identifier
    ExpectedIdentifier,
    /// Opening delimiter without its closing partner
    UnbalancedDelimiter,
    /// `try` without any `catch` or `finally` clause
    MissingCatchOrFinally,

    // Semantic Warnings (W2xxx)
    /// Multi-catch type already covered by another listed type
    RedundantCatchType,
    /// Second `default` label in one switch
    DuplicateDefaultLabel,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::UnterminatedLiteral,
        ErrorCode::IllegalCharacter,
        ErrorCode::InvalidNumericLiteral,
        ErrorCode::InvalidEscape,
        ErrorCode::UnterminatedComment,
        // Parser
        ErrorCode::UnexpectedToken,
        ErrorCode::ExpectedExpression,
        ErrorCode::ExpectedType,
        ErrorCode::ExpectedIdentifier,
        ErrorCode::UnbalancedDelimiter,
        ErrorCode::MissingCatchOrFinally,
        // Semantic
        ErrorCode::RedundantCatchType,
        ErrorCode::DuplicateDefaultLabel,
    ];

    /// Stable identifier, e.g. `"E1001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedLiteral => "E0001",
            ErrorCode::IllegalCharacter => "E0002",
            ErrorCode::InvalidNumericLiteral => "E0003",
            ErrorCode::InvalidEscape => "E0004",
            ErrorCode::UnterminatedComment => "E0005",
            ErrorCode::UnexpectedToken => "E1001",
            ErrorCode::ExpectedExpression => "E1002",
            ErrorCode::ExpectedType => "E1003",
            ErrorCode::ExpectedIdentifier => "E1004",
            ErrorCode::UnbalancedDelimiter => "E1005",
            ErrorCode::MissingCatchOrFinally => "E1006",
            ErrorCode::RedundantCatchType => "W2001",
            ErrorCode::DuplicateDefaultLabel => "W2002",
        }
    }

    /// Phase classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::UnterminatedLiteral
            | ErrorCode::IllegalCharacter
            | ErrorCode::InvalidNumericLiteral
            | ErrorCode::InvalidEscape
            | ErrorCode::UnterminatedComment => ErrorCategory::Lex,
            ErrorCode::UnexpectedToken
            | ErrorCode::ExpectedExpression
            | ErrorCode::ExpectedType
            | ErrorCode::ExpectedIdentifier
            | ErrorCode::UnbalancedDelimiter
            | ErrorCode::MissingCatchOrFinally => ErrorCategory::Syntax,
            ErrorCode::RedundantCatchType | ErrorCode::DuplicateDefaultLabel => {
                ErrorCategory::Semantic
            }
        }
    }

    /// Check if this is a lexer error (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        self.category() == ErrorCategory::Lex
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        self.category() == ErrorCategory::Syntax
    }

    /// Check if this code is reported with warning severity.
    pub fn is_warning(&self) -> bool {
        self.category() == ErrorCategory::Semantic
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
