use brew_diagnostic::ErrorCode;
use brew_ir::{NodeKind, Span};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_source_yields_empty_unit() {
    let result = parse("");
    assert!(result.is_clean());
    let tree = &result.tree;
    assert_eq!(tree.kind(tree.root()), NodeKind::CompilationUnit);
    assert_eq!(tree.span(tree.root()), Span::new(0, 0));
    assert!(tree.children(tree.root()).is_empty());
}

#[test]
fn root_covers_trailing_trivia() {
    let source = "class A {}\n// trailing\n";
    let result = parse(source);
    assert!(result.is_clean());
    let len = u32::try_from(source.len()).unwrap();
    assert_eq!(result.tree.span(result.tree.root()), Span::new(0, len));
}

#[test]
fn options_carry_file_name_and_offset() {
    let source = "garbage !! class A {}";
    let options = ParseOptions::new()
        .with_file_name("A.java")
        .with_offset(11);
    let result = parse_with_options(source, &options);
    assert!(result.is_clean(), "{:?}", result.diagnostics);
    assert_eq!(result.file_name.as_deref(), Some("A.java"));
    let tree = &result.tree;
    assert_eq!(tree.span(tree.root()), Span::new(11, 21));
    let class = tree.child(tree.root(), 0).unwrap();
    assert_eq!(tree.span(class).text(source), "class A {}");
}

#[test]
fn parse_from_existing_cursor() {
    let cursor = TokenCursor::from_source("interface I {}");
    let result = parse_compilation_unit(cursor);
    assert!(result.is_clean());
    assert_eq!(result.file_name, None);
    let tree = &result.tree;
    let decl = tree.child(tree.root(), 0).unwrap();
    assert_eq!(tree.name_of(decl), Some("I"));
}

#[test]
fn lexer_and_parser_diagnostics_are_merged_in_source_order() {
    let source = "class A { int x = ; char c = ''; }";
    let result = parse(source);
    let codes: Vec<_> = result.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        [ErrorCode::ExpectedExpression, ErrorCode::UnterminatedLiteral]
    );
    assert!(result.diagnostics[0].span.start < result.diagnostics[1].span.start);
}

#[test]
fn error_at_lexer_error_token_is_not_repeated() {
    let result = parse("class #A {}");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::IllegalCharacter);
}

#[test]
fn warnings_do_not_count_as_errors() {
    let source = "class A { void f(int x) { switch (x) { default: default: } } }";
    let result = parse(source);
    assert!(!result.has_errors());
    assert!(!result.is_clean());
    assert_eq!(result.errors().count(), 0);
    assert_eq!(result.warnings().count(), 1);
    assert_eq!(result.with_code(ErrorCode::DuplicateDefaultLabel).count(), 1);
}

#[test]
fn errors_are_reported_as_errors() {
    let result = parse("class A { void f() { try { } } }");
    assert!(result.has_errors());
    assert_eq!(result.errors().count(), 1);
    assert_eq!(result.warnings().count(), 0);
}

#[test]
fn run_of_stray_closing_braces_is_one_error() {
    let source = "}}}} class A {}";
    let result = parse(source);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::UnexpectedToken);
    assert_eq!(result.diagnostics[0].span, Span::new(0, 1));
    let tree = &result.tree;
    let labels: Vec<_> = tree
        .children(tree.root())
        .iter()
        .map(|&id| tree.kind(id).label())
        .collect();
    assert_eq!(labels, ["Error", "ClassDecl"]);
    let error = tree.child(tree.root(), 0).unwrap();
    assert_eq!(tree.span(error), Span::new(0, 4));
    assert!(tree.validate().is_ok());
}

#[test]
fn extra_brace_after_class_is_one_error() {
    let source = "class A { void f() { } } } } class B {}";
    let result = parse(source);
    assert_eq!(result.errors().count(), 1);
    let tree = &result.tree;
    let names: Vec<_> = tree
        .children(tree.root())
        .iter()
        .filter_map(|&id| tree.name_of(id))
        .collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn parse_options_default() {
    let options = ParseOptions::default();
    assert_eq!(options, ParseOptions::new());
    assert_eq!(options.offset, 0);
    assert_eq!(options.file_name, None);
}
