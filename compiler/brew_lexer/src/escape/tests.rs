use pretty_assertions::assert_eq;

use super::*;

fn check(body: &str) -> (usize, Vec<String>) {
    let mut errors = Vec::new();
    let count = validate(body, 0, &mut errors);
    let escapes = errors
        .into_iter()
        .map(|e| match e.kind {
            LexErrorKind::InvalidEscape { escape } => escape,
            other => panic!("unexpected error {other:?}"),
        })
        .collect();
    (count, escapes)
}

#[test]
fn simple_escapes_are_valid() {
    assert_eq!(check(r#"\b\t\n\f\r\"\'\\"#), (8, vec![]));
}

#[test]
fn octal_escapes() {
    assert_eq!(check(r"\0"), (1, vec![]));
    assert_eq!(check(r"\377"), (1, vec![]));
    // `\477` is `\47` followed by `7`
    assert_eq!(check(r"\477"), (2, vec![]));
    assert_eq!(check(r"\08"), (2, vec![]));
}

#[test]
fn unicode_escapes() {
    assert_eq!(check(r"\u0041"), (1, vec![]));
    assert_eq!(check(r"\uuu00e9x"), (2, vec![]));
    assert_eq!(check(r"\u00g1").1, vec![r"\u".to_string()]);
    assert_eq!(check(r"\u12").1, vec![r"\u".to_string()]);
}

#[test]
fn invalid_escapes_are_reported_with_span() {
    let mut errors = Vec::new();
    let count = validate(r"ab\qc\é", 10, &mut errors);
    assert_eq!(count, 5);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].span, Span::new(12, 14));
    assert_eq!(errors[1].span, Span::new(15, 18));
    assert_eq!(
        errors[1].kind,
        LexErrorKind::InvalidEscape {
            escape: r"\é".to_string()
        }
    );
}

#[test]
fn trailing_backslash_is_invalid() {
    assert_eq!(check("a\\").1, vec!["\\".to_string()]);
}

#[test]
fn multibyte_characters_count_once() {
    assert_eq!(check("λ日"), (2, vec![]));
}

#[test]
fn unescape_values() {
    assert_eq!(unescape(r"a\tb"), "a\tb");
    assert_eq!(unescape(r"A\101\0"), "AA\0");
    assert_eq!(unescape(r#"\"q\"\\"#), "\"q\"\\");
    assert_eq!(unescape(r"bad\q"), r"bad\q");
}
