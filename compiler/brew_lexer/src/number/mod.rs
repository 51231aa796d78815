//! Numeric literal validation.
//!
//! The raw scanner hands over a maximal number-shaped run (`0x1F`, `1_000L`,
//! `12abc`, `1.5e`). Classification decides whether it is a valid integer
//! or floating-point literal and, if not, why.

use brew_ir::TokenKind;
use brew_lexer_core::RawTag;

use crate::lex_error::NumberError;

/// Classify a numeric raw token.
///
/// A decimal run ending in `f F d D` is a floating-point literal even
/// without a fraction (`3f`, `10d`).
pub(crate) fn classify(tag: RawTag, text: &str) -> Result<TokenKind, NumberError> {
    match tag {
        RawTag::HexInt => radix_int(text.get(2..).unwrap_or(""), 16),
        RawTag::BinInt => radix_int(text.get(2..).unwrap_or(""), 2),
        RawTag::Float => float(text),
        _ => decimal_int(text),
    }
}

fn radix_int(body: &str, radix: u8) -> Result<TokenKind, NumberError> {
    let digits = body.strip_suffix(['l', 'L']).unwrap_or(body);
    if digits.is_empty() {
        return Err(NumberError::MissingDigits);
    }
    for ch in digits.chars() {
        if ch != '_' && !ch.is_digit(u32::from(radix)) {
            return Err(NumberError::InvalidDigit { digit: ch, radix });
        }
    }
    check_underscores(digits)?;
    Ok(TokenKind::IntLiteral)
}

fn decimal_int(text: &str) -> Result<TokenKind, NumberError> {
    let (digits, suffix) = split_digits(text);
    match suffix {
        "" | "l" | "L" => {}
        "f" | "F" | "d" | "D" => return float(text),
        _ => return Err(NumberError::InvalidSuffix),
    }
    check_underscores(digits)?;
    // A leading zero makes the literal octal.
    if digits.len() > 1 && digits.starts_with('0') {
        if let Some(bad) = digits.chars().find(|c| matches!(c, '8' | '9')) {
            return Err(NumberError::InvalidDigit {
                digit: bad,
                radix: 8,
            });
        }
    }
    Ok(TokenKind::IntLiteral)
}

fn float(text: &str) -> Result<TokenKind, NumberError> {
    let (int_part, mut rest) = split_digits(text);
    check_underscores(int_part)?;

    let mut frac_part = "";
    if let Some(after_dot) = rest.strip_prefix('.') {
        (frac_part, rest) = split_digits(after_dot);
        check_underscores(frac_part)?;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(NumberError::MissingDigits);
    }

    if let Some(after_e) = rest.strip_prefix(['e', 'E']) {
        let after_sign = after_e.strip_prefix(['+', '-']).unwrap_or(after_e);
        let (exponent, tail) = split_digits(after_sign);
        rest = tail;
        if exponent.is_empty() {
            return Err(NumberError::EmptyExponent);
        }
        check_underscores(exponent)?;
    }

    match rest {
        "" | "f" | "F" | "d" | "D" => Ok(TokenKind::FloatLiteral),
        _ => Err(NumberError::InvalidSuffix),
    }
}

/// Split a leading run of decimal digits and underscores from `text`.
fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '_'))
        .unwrap_or(text.len());
    text.split_at(end)
}

fn check_underscores(digits: &str) -> Result<(), NumberError> {
    if digits.starts_with('_') || digits.ends_with('_') {
        Err(NumberError::MisplacedUnderscore)
    } else {
        Ok(())
    }
}
