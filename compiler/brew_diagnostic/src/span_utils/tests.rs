use brew_ir::{SourcePosition, Span};

use super::*;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1); // 'l' of line1
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2); // 'l' of line2
    assert_eq!(table.line_from_offset(12), 3); // 'l' of line3
    assert_eq!(table.line_count(), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 11), (3, 2));
}

#[test]
fn test_columns_count_chars() {
    let source = "String s = \"héllo\"; x";
    let table = LineOffsetTable::build(source);
    let x = u32::try_from(source.rfind('x').unwrap_or(0)).unwrap_or(0);
    assert_eq!(table.offset_to_line_col(source, x), (1, 21));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 50), (1, 3));
}

#[test]
fn test_position_from_span() {
    let source = "class A {\n  int x;\n}";
    let table = LineOffsetTable::build(source);
    assert_eq!(
        table.position(source, Span::new(12, 15)),
        SourcePosition::new(2, 3, 12)
    );
}

#[test]
fn test_line_start_offset() {
    let table = LineOffsetTable::build("a\nbb\nccc");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(3), Some(5));
    assert_eq!(table.line_start_offset(4), None);
}
