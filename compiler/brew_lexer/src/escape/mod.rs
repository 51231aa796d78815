//! Escape sequence validation for string and character literals.
//!
//! Valid escapes: `\b` `\t` `\n` `\f` `\r` `\"` `\'` `\\`, octal escapes
//! `\0` to `\377` (one to three digits, three only when the first is
//! `0`-`3`), and unicode escapes `\u` (one or more `u`) followed by four
//! hex digits.
//!
//! Invalid escapes are reported but do not invalidate the literal: the
//! token keeps its literal kind and parsing proceeds normally.

use brew_ir::Span;

use crate::lex_error::{LexError, LexErrorKind};

/// Length in bytes of the escape starting at `body[0] == b'\\'`, or `None`
/// if it is not a valid escape.
fn escape_len(body: &[u8]) -> Option<usize> {
    match body.get(1)? {
        b'b' | b't' | b'n' | b'f' | b'r' | b'"' | b'\'' | b'\\' => Some(2),
        first @ b'0'..=b'7' => {
            let max_digits = if *first <= b'3' { 3 } else { 2 };
            let digits = body[1..]
                .iter()
                .take(max_digits)
                .take_while(|b| matches!(b, b'0'..=b'7'))
                .count();
            Some(1 + digits)
        }
        b'u' => {
            let us = body[1..].iter().take_while(|&&b| b == b'u').count();
            let hex_start = 1 + us;
            let hex = body.get(hex_start..hex_start + 4)?;
            hex.iter()
                .all(u8::is_ascii_hexdigit)
                .then_some(hex_start + 4)
        }
        _ => None,
    }
}

/// Validate every escape in a literal body (the text between the quotes).
///
/// `base_offset` is the byte offset of `body` in the source. Returns the
/// number of logical characters in the body, counting each escape as one,
/// so char literals can check that they hold exactly one character.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets bounded by u32 - entire source file < u32::MAX bytes"
)]
pub(crate) fn validate(body: &str, base_offset: u32, errors: &mut Vec<LexError>) -> usize {
    let bytes = body.as_bytes();
    let mut i = 0;
    let mut count = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            if let Some(len) = escape_len(&bytes[i..]) {
                i += len;
            } else {
                // Report the backslash plus the following character.
                let bad_len = body[i + 1..].chars().next().map_or(0, char::len_utf8);
                let end = i + 1 + bad_len;
                errors.push(LexError::new(
                    Span::new(base_offset + i as u32, base_offset + end as u32),
                    LexErrorKind::InvalidEscape {
                        escape: body[i..end].to_string(),
                    },
                ));
                i = end;
            }
        } else {
            i += body[i..].chars().next().map_or(1, char::len_utf8);
        }
        count += 1;
    }
    count
}

/// Resolve the escapes in a literal body into the value it denotes.
///
/// Invalid escapes are kept verbatim; they have already been reported by
/// [`validate`].
pub fn unescape(body: &str) -> String {
    let bytes = body.as_bytes();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            let ch = body[i..].chars().next().unwrap_or('\u{FFFD}');
            out.push(ch);
            i += ch.len_utf8();
            continue;
        }
        let Some(len) = escape_len(&bytes[i..]) else {
            out.push('\\');
            i += 1;
            continue;
        };
        let escape = &body[i + 1..i + len];
        let ch = match bytes[i + 1] {
            b'b' => '\u{8}',
            b't' => '\t',
            b'n' => '\n',
            b'f' => '\u{c}',
            b'r' => '\r',
            b'u' => u32::from_str_radix(escape.trim_start_matches('u'), 16)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or('\u{FFFD}'),
            b'0'..=b'7' => u32::from_str_radix(escape, 8)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or('\u{FFFD}'),
            other => char::from(other),
        };
        out.push(ch);
        i += len;
    }
    out
}

#[cfg(test)]
mod tests;
