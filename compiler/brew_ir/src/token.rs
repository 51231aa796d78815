//! Token kinds and tokens produced by the lexer.
//!
//! `TokenKind` is fieldless: literal values and identifier text are read
//! back from the source through the token's span. Keeping the enum fieldless
//! lets recovery sets store kinds in a `u128` bitset keyed by discriminant.

use std::fmt;

use crate::{SourcePosition, Span};

/// Broad classification of a token kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    Identifier,
    Keyword,
    StringLiteral,
    CharLiteral,
    NumberLiteral,
    Operator,
    Punctuation,
    Trivia,
    Error,
    Eof,
}

macro_rules! token_kinds {
    ($( $(#[$doc:meta])* $variant:ident => $text:literal, $cat:ident; )*) => {
        /// Token kinds.
        ///
        /// Keywords follow the Java reserved-word list, plus the literal
        /// keywords `true`, `false` and `null`. `>` is always a single token;
        /// the parser composes shift and `>=` operators from adjacent tokens.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[repr(u8)]
        pub enum TokenKind {
            $( $(#[$doc])* $variant, )*
        }

        impl TokenKind {
            /// Every token kind, indexed by discriminant.
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// Human-readable name used in "expected ..." messages.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $text, )*
                }
            }

            /// Broad category of this kind.
            pub const fn category(self) -> TokenCategory {
                match self {
                    $( TokenKind::$variant => TokenCategory::$cat, )*
                }
            }
        }
    };
}

token_kinds! {
    /// Identifier.
    Ident => "identifier", Identifier;
    /// Decimal, octal, hex or binary integer literal, optional `L` suffix.
    IntLiteral => "integer literal", NumberLiteral;
    /// Floating-point literal, optional `f`/`d` suffix.
    FloatLiteral => "floating-point literal", NumberLiteral;
    /// Character literal: `'a'`, `'\n'`.
    CharLiteral => "character literal", CharLiteral;
    /// String literal: `"text"`.
    StringLiteral => "string literal", StringLiteral;

    Abstract => "abstract", Keyword;
    Assert => "assert", Keyword;
    Boolean => "boolean", Keyword;
    Break => "break", Keyword;
    Byte => "byte", Keyword;
    Case => "case", Keyword;
    Catch => "catch", Keyword;
    Char => "char", Keyword;
    Class => "class", Keyword;
    Const => "const", Keyword;
    Continue => "continue", Keyword;
    Default => "default", Keyword;
    Do => "do", Keyword;
    Double => "double", Keyword;
    Else => "else", Keyword;
    Enum => "enum", Keyword;
    Extends => "extends", Keyword;
    Final => "final", Keyword;
    Finally => "finally", Keyword;
    Float => "float", Keyword;
    For => "for", Keyword;
    Goto => "goto", Keyword;
    If => "if", Keyword;
    Implements => "implements", Keyword;
    Import => "import", Keyword;
    Instanceof => "instanceof", Keyword;
    Int => "int", Keyword;
    Interface => "interface", Keyword;
    Long => "long", Keyword;
    Native => "native", Keyword;
    New => "new", Keyword;
    Package => "package", Keyword;
    Private => "private", Keyword;
    Protected => "protected", Keyword;
    Public => "public", Keyword;
    Return => "return", Keyword;
    Short => "short", Keyword;
    Static => "static", Keyword;
    Strictfp => "strictfp", Keyword;
    Super => "super", Keyword;
    Switch => "switch", Keyword;
    Synchronized => "synchronized", Keyword;
    This => "this", Keyword;
    Throw => "throw", Keyword;
    Throws => "throws", Keyword;
    Transient => "transient", Keyword;
    Try => "try", Keyword;
    Void => "void", Keyword;
    Volatile => "volatile", Keyword;
    While => "while", Keyword;
    True => "true", Keyword;
    False => "false", Keyword;
    Null => "null", Keyword;

    LParen => "(", Punctuation;
    RParen => ")", Punctuation;
    LBrace => "{", Punctuation;
    RBrace => "}", Punctuation;
    LBracket => "[", Punctuation;
    RBracket => "]", Punctuation;
    Semicolon => ";", Punctuation;
    Comma => ",", Punctuation;
    Dot => ".", Punctuation;
    Ellipsis => "...", Punctuation;
    At => "@", Punctuation;
    DoubleColon => "::", Punctuation;

    Eq => "=", Operator;
    Gt => ">", Operator;
    Lt => "<", Operator;
    Bang => "!", Operator;
    Tilde => "~", Operator;
    Question => "?", Operator;
    Colon => ":", Operator;
    Arrow => "->", Operator;
    EqEq => "==", Operator;
    LtEq => "<=", Operator;
    NotEq => "!=", Operator;
    AmpAmp => "&&", Operator;
    PipePipe => "||", Operator;
    PlusPlus => "++", Operator;
    MinusMinus => "--", Operator;
    Plus => "+", Operator;
    Minus => "-", Operator;
    Star => "*", Operator;
    Slash => "/", Operator;
    Amp => "&", Operator;
    Pipe => "|", Operator;
    Caret => "^", Operator;
    Percent => "%", Operator;
    Shl => "<<", Operator;
    PlusEq => "+=", Operator;
    MinusEq => "-=", Operator;
    StarEq => "*=", Operator;
    SlashEq => "/=", Operator;
    AmpEq => "&=", Operator;
    PipeEq => "|=", Operator;
    CaretEq => "^=", Operator;
    PercentEq => "%=", Operator;
    ShlEq => "<<=", Operator;

    /// Spaces, tabs and line breaks (only produced when trivia is kept).
    Whitespace => "whitespace", Trivia;
    /// Line or block comment (only produced when trivia is kept).
    Comment => "comment", Trivia;
    /// Malformed input; the lexer recorded a matching `LexError`.
    Error => "invalid token", Error;
    /// End of input. Zero-width, always the last token.
    Eof => "end of file", Eof;
}

// Recovery sets use a u128 bitset keyed by discriminant.
const _: () = assert!(TokenKind::ALL.len() <= 128);

impl TokenKind {
    /// Dense discriminant index (`0..ALL.len()`).
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`discriminant_index`](Self::discriminant_index).
    pub fn from_discriminant_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(index as usize).copied()
    }

    /// True for reserved words, including `true`, `false` and `null`.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), TokenCategory::Keyword)
    }

    /// True for whitespace and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self.category(), TokenCategory::Trivia)
    }

    /// True for the eight primitive type keywords.
    #[inline]
    pub const fn is_primitive_type(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Byte
                | TokenKind::Char
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Float
                | TokenKind::Double
        )
    }

    /// True for literal tokens, including `true`, `false` and `null`.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified token with its span and resolved positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, start: SourcePosition, end: SourcePosition) -> Self {
        Token {
            kind,
            span,
            start,
            end,
        }
    }

    /// The token's text in `source`.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }

    /// True if `next` begins exactly where this token ends.
    #[inline]
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.span.end == next.span.start
    }
}
