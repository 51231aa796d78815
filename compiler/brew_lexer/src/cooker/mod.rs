//! Token cooking: raw `(tag, len)` pairs to classified [`TokenKind`]s.
//!
//! The raw scanner only knows token shapes. Cooking resolves keywords,
//! validates numeric literals and escape sequences, and turns scanner error
//! tags into `Error` tokens with a matching [`LexError`].

use brew_ir::{Span, TokenKind};
use brew_lexer_core::RawTag;

use crate::escape;
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::number;

/// Classifies raw tokens and accumulates lexer errors.
#[derive(Clone)]
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    errors: Vec<LexError>,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TokenCooker {
            source,
            errors: Vec::new(),
        }
    }

    /// Cook the raw token spanning `span`.
    pub(crate) fn cook(&mut self, tag: RawTag, span: Span) -> TokenKind {
        match tag {
            RawTag::Ident => {
                keywords::lookup(span.text(self.source)).unwrap_or(TokenKind::Ident)
            }
            RawTag::Int | RawTag::Float | RawTag::HexInt | RawTag::BinInt => {
                self.cook_number(tag, span)
            }
            RawTag::String => self.cook_string(span),
            RawTag::Char => self.cook_char(span),

            RawTag::Plus => TokenKind::Plus,
            RawTag::PlusPlus => TokenKind::PlusPlus,
            RawTag::PlusEq => TokenKind::PlusEq,
            RawTag::Minus => TokenKind::Minus,
            RawTag::MinusMinus => TokenKind::MinusMinus,
            RawTag::MinusEq => TokenKind::MinusEq,
            RawTag::Arrow => TokenKind::Arrow,
            RawTag::Star => TokenKind::Star,
            RawTag::StarEq => TokenKind::StarEq,
            RawTag::Slash => TokenKind::Slash,
            RawTag::SlashEq => TokenKind::SlashEq,
            RawTag::Percent => TokenKind::Percent,
            RawTag::PercentEq => TokenKind::PercentEq,
            RawTag::Caret => TokenKind::Caret,
            RawTag::CaretEq => TokenKind::CaretEq,
            RawTag::Amp => TokenKind::Amp,
            RawTag::AmpAmp => TokenKind::AmpAmp,
            RawTag::AmpEq => TokenKind::AmpEq,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::PipePipe => TokenKind::PipePipe,
            RawTag::PipeEq => TokenKind::PipeEq,
            RawTag::Eq => TokenKind::Eq,
            RawTag::EqEq => TokenKind::EqEq,
            RawTag::Bang => TokenKind::Bang,
            RawTag::NotEq => TokenKind::NotEq,
            RawTag::Less => TokenKind::Lt,
            RawTag::LessEq => TokenKind::LtEq,
            RawTag::Shl => TokenKind::Shl,
            RawTag::ShlEq => TokenKind::ShlEq,
            RawTag::Greater => TokenKind::Gt,
            RawTag::Tilde => TokenKind::Tilde,
            RawTag::Question => TokenKind::Question,
            RawTag::Colon => TokenKind::Colon,
            RawTag::ColonColon => TokenKind::DoubleColon,

            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Ellipsis => TokenKind::Ellipsis,
            RawTag::At => TokenKind::At,

            RawTag::Whitespace | RawTag::Newline => TokenKind::Whitespace,
            RawTag::LineComment | RawTag::BlockComment => TokenKind::Comment,

            RawTag::UnterminatedBlockComment => {
                // Point at the opener; the comment itself still runs to EOF.
                let opener = Span::new(span.start, span.start.saturating_add(2).min(span.end));
                self.error(opener, LexErrorKind::UnterminatedComment);
                TokenKind::Comment
            }
            RawTag::InvalidChar => {
                let ch = span.text(self.source).chars().next().unwrap_or('\u{FFFD}');
                self.error(span, LexErrorKind::IllegalCharacter { ch })
            }
            RawTag::UnterminatedString => self.error(span, LexErrorKind::UnterminatedString),
            RawTag::UnterminatedChar => self.error(span, LexErrorKind::UnterminatedChar),

            RawTag::Eof => TokenKind::Eof,
        }
    }

    fn cook_number(&mut self, tag: RawTag, span: Span) -> TokenKind {
        match number::classify(tag, span.text(self.source)) {
            Ok(kind) => kind,
            Err(reason) => self.error(span, LexErrorKind::InvalidNumber(reason)),
        }
    }

    fn cook_string(&mut self, span: Span) -> TokenKind {
        escape::validate(self.body(span), span.start + 1, &mut self.errors);
        TokenKind::StringLiteral
    }

    fn cook_char(&mut self, span: Span) -> TokenKind {
        match escape::validate(self.body(span), span.start + 1, &mut self.errors) {
            0 => self.error(span, LexErrorKind::EmptyCharLiteral),
            1 => TokenKind::CharLiteral,
            _ => self.error(span, LexErrorKind::MultiCharLiteral),
        }
    }

    /// Text between the quotes of a terminated literal.
    fn body(&self, span: Span) -> &'src str {
        let text = span.text(self.source);
        text.get(1..text.len().saturating_sub(1)).unwrap_or("")
    }

    /// Record an error and produce the `Error` kind for its token.
    #[cold]
    fn error(&mut self, span: Span, kind: LexErrorKind) -> TokenKind {
        self.errors.push(LexError::new(span, kind));
        TokenKind::Error
    }

    /// Errors recorded so far, in source order.
    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Take all recorded errors, leaving the list empty.
    pub(crate) fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}
