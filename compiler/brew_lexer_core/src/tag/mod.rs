//! Raw token tags produced by the scanner.

/// Raw token tag.
///
/// Discriminants are grouped by semantic range so a tag can be classified
/// with a single comparison:
/// - 0-15: identifiers and literals
/// - 32-79: operators
/// - 80-95: delimiters
/// - 112-119: trivia
/// - 240-254: errors
/// - 255: end of input
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum RawTag {
    // ─── Identifiers & Literals ────────────────────────────────────
    /// Identifier or keyword (`[A-Za-z_$][A-Za-z0-9_$]*`, plus Unicode letters).
    Ident = 0,
    /// Decimal or octal integer, possibly with a trailing suffix run.
    Int = 1,
    /// Number with a fraction or exponent.
    Float = 2,
    /// `0x` / `0X` prefixed number.
    HexInt = 3,
    /// `0b` / `0B` prefixed number.
    BinInt = 4,
    /// Double-quoted string literal, closing quote included.
    String = 5,
    /// Single-quoted character literal, closing quote included.
    Char = 6,

    // ─── Operators ─────────────────────────────────────────────────
    Plus = 32,
    PlusPlus = 33,
    PlusEq = 34,
    Minus = 35,
    MinusMinus = 36,
    MinusEq = 37,
    Arrow = 38,
    Star = 39,
    StarEq = 40,
    Slash = 41,
    SlashEq = 42,
    Percent = 43,
    PercentEq = 44,
    Caret = 45,
    CaretEq = 46,
    Amp = 47,
    AmpAmp = 48,
    AmpEq = 49,
    Pipe = 50,
    PipePipe = 51,
    PipeEq = 52,
    Eq = 53,
    EqEq = 54,
    Bang = 55,
    NotEq = 56,
    Less = 57,
    LessEq = 58,
    Shl = 59,
    ShlEq = 60,
    /// Always a single `>`; shifts and `>=` are composed by the parser.
    Greater = 61,
    Tilde = 62,
    Question = 63,
    Colon = 64,
    ColonColon = 65,

    // ─── Delimiters ────────────────────────────────────────────────
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Semicolon = 86,
    Comma = 87,
    Dot = 88,
    Ellipsis = 89,
    At = 90,

    // ─── Trivia ────────────────────────────────────────────────────
    /// Spaces, tabs and form feeds.
    Whitespace = 112,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline = 113,
    /// `// ...` up to (not including) the line break.
    LineComment = 114,
    /// `/* ... */`, including Javadoc comments.
    BlockComment = 115,

    // ─── Errors ────────────────────────────────────────────────────
    /// A character that cannot start any token. Covers the whole UTF-8
    /// character, or a single interior NUL byte.
    InvalidChar = 240,
    /// String literal cut off by a line break or end of input.
    UnterminatedString = 241,
    /// Character literal cut off by a line break or end of input.
    UnterminatedChar = 242,
    /// `/*` without a matching `*/`; runs to end of input.
    UnterminatedBlockComment = 243,

    // ─── Control ───────────────────────────────────────────────────
    Eof = 255,
}

impl RawTag {
    /// Whitespace, line breaks and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (112..=119).contains(&(self as u8))
    }

    /// Tags that the cooking layer must report as lex errors.
    #[inline]
    pub fn is_error(self) -> bool {
        (240..=254).contains(&(self as u8))
    }

    /// Number-shaped tags.
    #[inline]
    pub fn is_number(self) -> bool {
        matches!(
            self,
            RawTag::Int | RawTag::Float | RawTag::HexInt | RawTag::BinInt
        )
    }
}

/// One scanned token: its tag and byte length.
///
/// The start offset is implicit: it is the sum of all previous lengths.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
