use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance_n(2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn peek_past_end_is_zero() {
    let cursor = Cursor::new("a");
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn with_offset_starts_mid_source() {
    let cursor = Cursor::with_offset("int x;", 4);
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 4);
}

#[test]
fn with_offset_snaps_to_char_boundary() {
    // 'é' occupies bytes 1..3
    let cursor = Cursor::with_offset("aéb", 2);
    assert_eq!(cursor.pos(), 3);
    let past_end = Cursor::with_offset("ab", 10);
    assert!(past_end.is_eof());
}

// === Slicing ===

#[test]
fn slice_and_slice_from() {
    let mut cursor = Cursor::new("hello world");
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
    assert_eq!(cursor.slice(6, 99), "");
}

// === Scanning helpers ===

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("12345");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert!(cursor.is_eof());
}

#[test]
fn advance_char_multibyte() {
    let mut cursor = Cursor::new("λx");
    assert_eq!(cursor.current_char(), Some('λ'));
    cursor.advance_char();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_newline_stops_at_cr_and_lf() {
    let mut cursor = Cursor::new("// c\r\nx");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');

    let mut cursor = Cursor::new("// no newline");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_literal_delim_finds_earliest() {
    let mut cursor = Cursor::new("abc\\\"def\"");
    assert_eq!(cursor.skip_to_literal_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 3);

    let mut cursor = Cursor::new("ab\rc'");
    assert_eq!(cursor.skip_to_literal_delim(b'\''), b'\r');

    let mut cursor = Cursor::new("open");
    assert_eq!(cursor.skip_to_literal_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_tail() {
    let mut cursor = Cursor::new(" body * still */rest");
    assert!(cursor.eat_block_comment_tail());
    assert_eq!(cursor.slice_from(cursor.pos()), "");
    assert_eq!(cursor.current(), b'r');

    let mut cursor = Cursor::new(" never closed *");
    assert!(!cursor.eat_block_comment_tail());
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_includes_form_feed() {
    let mut cursor = Cursor::new(" \t\x0cx");
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn cursor_is_copy_for_snapshots() {
    let mut cursor = Cursor::new("abc");
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}
