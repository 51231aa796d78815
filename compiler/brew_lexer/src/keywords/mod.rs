//! Reserved word resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter (reserved
//! words range from 2 to 12 characters), then matches against the words of
//! that length. All reserved words are lowercase ASCII, so anything starting
//! with another byte is rejected immediately.

use brew_ir::TokenKind;

/// Look up a reserved word by text.
///
/// Returns the corresponding `TokenKind` if the text is a reserved word
/// (including the literals `true`, `false` and `null`), `None` if it is a
/// regular identifier. Matching is exact and case-sensitive.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        4 => match text {
            "byte" => Some(TokenKind::Byte),
            "case" => Some(TokenKind::Case),
            "char" => Some(TokenKind::Char),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "goto" => Some(TokenKind::Goto),
            "long" => Some(TokenKind::Long),
            "null" => Some(TokenKind::Null),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::False),
            "final" => Some(TokenKind::Final),
            "float" => Some(TokenKind::Float),
            "short" => Some(TokenKind::Short),
            "super" => Some(TokenKind::Super),
            "throw" => Some(TokenKind::Throw),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "assert" => Some(TokenKind::Assert),
            "double" => Some(TokenKind::Double),
            "import" => Some(TokenKind::Import),
            "native" => Some(TokenKind::Native),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            "switch" => Some(TokenKind::Switch),
            "throws" => Some(TokenKind::Throws),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(TokenKind::Boolean),
            "default" => Some(TokenKind::Default),
            "extends" => Some(TokenKind::Extends),
            "finally" => Some(TokenKind::Finally),
            "package" => Some(TokenKind::Package),
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            "strictfp" => Some(TokenKind::Strictfp),
            "volatile" => Some(TokenKind::Volatile),
            _ => None,
        },
        9 => match text {
            "interface" => Some(TokenKind::Interface),
            "protected" => Some(TokenKind::Protected),
            "transient" => Some(TokenKind::Transient),
            _ => None,
        },
        10 => match text {
            "implements" => Some(TokenKind::Implements),
            "instanceof" => Some(TokenKind::Instanceof),
            _ => None,
        },
        12 => match text {
            "synchronized" => Some(TokenKind::Synchronized),
            _ => None,
        },
        _ => None,
    }
}
