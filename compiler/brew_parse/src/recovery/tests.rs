use brew_ir::TokenKind;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert!(!set.contains(TokenKind::Class));
}

#[test]
fn test_token_set_with_and_union() {
    let a = TokenSet::new().with(TokenKind::If).with(TokenKind::For);
    let b = TokenSet::new().with(TokenKind::For).with(TokenKind::Eof);
    let union = a.union(b);
    assert_eq!(union.count(), 3);
    assert!(union.contains(TokenKind::If));
    assert!(union.contains(TokenKind::Eof));
    assert!(!union.contains(TokenKind::Plus));
}

#[test]
fn test_every_kind_fits_the_bitset() {
    let mut set = TokenSet::new();
    for &kind in TokenKind::ALL {
        set = set.with(kind);
    }
    assert_eq!(set.count() as usize, TokenKind::ALL.len());
}

#[test]
fn test_predefined_sets() {
    assert!(STMT_RECOVERY.contains(TokenKind::Try));
    assert!(STMT_RECOVERY.contains(TokenKind::Class));
    assert!(!STMT_RECOVERY.contains(TokenKind::Case));
    assert!(SWITCH_RECOVERY.contains(TokenKind::Case));
    assert!(MEMBER_RECOVERY.contains(TokenKind::Public));
    assert!(TOP_LEVEL_RECOVERY.contains(TokenKind::Import));
    assert!(!TOP_LEVEL_RECOVERY.contains(TokenKind::Ident));
}

#[test]
fn test_synchronize_consumes_semicolon() {
    let mut cursor = TokenCursor::from_source("x = = 3; y");
    assert!(synchronize(&mut cursor, STMT_RECOVERY));
    assert_eq!(cursor.current_kind(), TokenKind::Ident);
    assert_eq!(cursor.current_span().start, 9);
}

#[test]
fn test_synchronize_stops_before_closing_brace() {
    let mut cursor = TokenCursor::from_source("a b } c");
    assert!(synchronize(&mut cursor, STMT_RECOVERY));
    assert_eq!(cursor.current_kind(), TokenKind::RBrace);
}

#[test]
fn test_synchronize_stops_at_keyword() {
    let mut cursor = TokenCursor::from_source("1 2 return x;");
    assert!(synchronize(&mut cursor, STMT_RECOVERY));
    assert_eq!(cursor.current_kind(), TokenKind::Return);
}

#[test]
fn test_synchronize_skips_nested_braces() {
    let mut cursor = TokenCursor::from_source("new X() { void f() { return; } } ; next");
    assert!(synchronize(&mut cursor, STMT_RECOVERY));
    assert_eq!(cursor.current_kind(), TokenKind::Ident);
    assert_eq!(cursor.current().text(cursor.source()), "next");
}

#[test]
fn test_synchronize_eof() {
    let mut cursor = TokenCursor::from_source("a b c");
    assert!(!synchronize(&mut cursor, STMT_RECOVERY));
    assert!(cursor.is_at_end());
}
