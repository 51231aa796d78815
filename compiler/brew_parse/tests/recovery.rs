//! Panic-mode recovery on malformed programs.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use brew_diagnostic::ErrorCode;
use brew_ir::{NodeKind, SyntaxTree};
use brew_parse::parse;
use pretty_assertions::assert_eq;

fn count(tree: &SyntaxTree, pred: impl Fn(NodeKind) -> bool) -> usize {
    tree.descendants(tree.root())
        .filter(|&id| pred(tree.kind(id)))
        .count()
}

fn method_names(tree: &SyntaxTree) -> Vec<&str> {
    tree.descendants(tree.root())
        .filter(|&id| matches!(tree.kind(id), NodeKind::MethodDecl { .. }))
        .filter_map(|id| tree.name_of(id))
        .collect()
}

#[test]
fn bad_statement_does_not_lose_following_statements() {
    let source = "class A { void f() { int x = ; g(); h(); } }";
    let result = parse(source);
    assert_eq!(result.diagnostics.len(), 1);
    let tree = &result.tree;
    assert_eq!(count(tree, |k| k == NodeKind::ExprStmt), 2);
    assert_eq!(count(tree, |k| k == NodeKind::Error), 1);
    tree.validate().unwrap();
}

#[test]
fn bad_method_does_not_lose_following_methods() {
    let source = "class A { void f( { } void g() { } int h() { return 0; } }";
    let result = parse(source);
    assert!(result.has_errors());
    assert!(method_names(&result.tree).ends_with(&["g", "h"]));
    result.tree.validate().unwrap();
}

#[test]
fn recovery_stops_at_statement_keyword() {
    let source = "class A { void f() { x = = 1 if (y) z(); } }";
    let result = parse(source);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::ExpectedExpression);
    assert_eq!(count(&result.tree, |k| matches!(k, NodeKind::If { .. })), 1);
}

#[test]
fn recovery_in_switch_stops_at_next_label() {
    let source = "class A { void f() { switch (x) { case 1: ) ) case 2: b(); } } }";
    let result = parse(source);
    assert_eq!(result.errors().count(), 1);
    let tree = &result.tree;
    assert_eq!(count(tree, |k| k == NodeKind::SwitchGroup), 2);
    assert_eq!(count(tree, |k| matches!(k, NodeKind::CaseLabel { .. })), 2);
    tree.validate().unwrap();
}

#[test]
fn nested_braces_are_skipped_as_a_unit() {
    let source = "class A { ) { if (a) { b(); } } void ok() {} }";
    let result = parse(source);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(method_names(&result.tree), ["ok"]);
}

#[test]
fn broken_class_does_not_lose_next_class() {
    let source = "class A extends { } class B { }";
    let result = parse(source);
    assert!(result.has_errors());
    let tree = &result.tree;
    let names: Vec<_> = tree
        .children(tree.root())
        .iter()
        .filter_map(|&id| tree.name_of(id))
        .collect();
    assert_eq!(names, ["B"]);
}

#[test]
fn malformed_literals_each_report_once() {
    let source = "class A { void f() { a = 0x; b = 09; c = 'ab'; d = \"\\q\"; } }";
    let result = parse(source);
    let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        [
            ErrorCode::InvalidNumericLiteral,
            ErrorCode::InvalidNumericLiteral,
            ErrorCode::UnterminatedLiteral,
            ErrorCode::InvalidEscape,
        ]
    );
    assert_eq!(count(&result.tree, |k| k == NodeKind::ExprStmt), 4);
}

#[test]
fn unbalanced_parenthesis_points_at_opener() {
    let source = "class A { void f() { g(1, 2; } }";
    let result = parse(source);
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, ErrorCode::UnbalancedDelimiter);
    assert_eq!(diagnostic.note.as_deref(), Some("unclosed `(` opened at 1:23"));
}
