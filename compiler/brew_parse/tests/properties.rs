//! Parser-level properties: exact expectations on small programs and
//! never-panic laws over generated input.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use brew_diagnostic::ErrorCode;
use brew_ir::{NodeKind, SyntaxTree};
use brew_parse::{parse, ParseResult};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn in_method(body: &str) -> String {
    format!("class T {{ void m() {{ {body} }} }}")
}

fn all_of(tree: &SyntaxTree, kind: impl Fn(NodeKind) -> bool) -> Vec<brew_ir::NodeId> {
    tree.descendants(tree.root())
        .filter(|&id| kind(tree.kind(id)))
        .collect()
}

fn assert_diagnostics_within_input(source: &str, result: &ParseResult) {
    let len = u32::try_from(source.len()).unwrap();
    for diagnostic in &result.diagnostics {
        assert!(
            diagnostic.span.start <= diagnostic.span.end && diagnostic.span.end <= len,
            "{diagnostic:?} escapes input of length {len}"
        );
    }
}

#[test]
fn multi_catch_types_in_source_order() {
    let source = in_method(
        "try { run(); } catch (ArithmeticException | NullPointerException e) { }",
    );
    let result = parse(&source);
    assert!(result.is_clean(), "{:?}", result.diagnostics);
    let tree = &result.tree;
    let catches = all_of(tree, |k| matches!(k, NodeKind::CatchClause { .. }));
    assert_eq!(catches.len(), 1);
    assert_eq!(
        tree.catch_types(catches[0]),
        ["ArithmeticException", "NullPointerException"]
    );
}

#[test]
fn lone_try_reports_once_and_inserts_error_node() {
    let source = in_method("try { }");
    let result = parse(&source);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::MissingCatchOrFinally);

    let tree = &result.tree;
    let tries = all_of(tree, |k| k == NodeKind::Try);
    assert_eq!(tries.len(), 1);
    let error_children = tree
        .children(tries[0])
        .iter()
        .filter(|&&id| tree.kind(id) == NodeKind::Error)
        .count();
    assert_eq!(error_children, 1);
    tree.validate().unwrap();
}

#[test]
fn two_default_labels_warn_once_and_keep_both() {
    let source = in_method("switch (x) { case 1: a(); break; default: b(); break; default: c(); }");
    let result = parse(&source);
    assert!(!result.has_errors());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::DuplicateDefaultLabel);

    let tree = &result.tree;
    let labels: Vec<bool> = all_of(tree, |k| matches!(k, NodeKind::CaseLabel { .. }))
        .into_iter()
        .map(|id| tree.kind(id) == NodeKind::CaseLabel { is_default: true })
        .collect();
    assert_eq!(labels, [false, true, true]);
}

#[test]
fn generic_superclass_has_one_type_argument() {
    let source = "class SumTask extends RecursiveTask<Integer> { }";
    let result = parse(source);
    assert!(result.is_clean());
    let tree = &result.tree;
    let extends = all_of(tree, |k| k == NodeKind::Extends);
    let base = tree.child(extends[0], 0).unwrap();
    let args = tree.type_arguments(base);
    assert_eq!(args.len(), 1);
    assert_eq!(tree.name_of(args[0]), Some("Integer"));
}

#[test]
fn valid_input_root_spans_whole_input() {
    let source = "  /* header */ package p; class A { int f() { return 1 << 2; } }  ";
    let result = parse(source);
    assert!(result.is_clean());
    let span = result.tree.span(result.tree.root());
    assert_eq!((span.start, span.end), (0, u32::try_from(source.len()).unwrap()));
}

#[test]
fn unterminated_input_stays_in_bounds() {
    for source in [
        "class A { void f() { \"abc",
        "class A { /* never closed",
        "class A { char c = '",
        "class A<T extends",
        "class A { int[] x = {1, 2",
        "@",
        "package",
    ] {
        let result = parse(source);
        assert!(result.has_errors(), "{source}");
        assert_diagnostics_within_input(source, &result);
        result.tree.validate().unwrap();
    }
}

fn java_fragment() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "class ", "interface ", "enum ", "A ", "b ", "int ", "void ", "(", ")", "{", "}", "[",
        "]", "<", ">", ";", ",", ".", "=", "+", "-", "*", "?", ":", "@", "new ", "try ",
        "catch ", "finally ", "switch ", "case ", "default ", "if ", "else ", "for ",
        "return ", "1 ", "\"s\" ", "'c' ", "extends ", "|", "&&", "...", "// c\n", "/* x */",
    ]);
    prop::collection::vec(pieces, 0..60).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,200}") {
        let result = parse(&source);
        assert_diagnostics_within_input(&source, &result);
        prop_assert!(result.tree.validate().is_ok());
    }

    #[test]
    fn java_shaped_text_never_panics(source in java_fragment()) {
        let result = parse(&source);
        assert_diagnostics_within_input(&source, &result);
        prop_assert!(result.tree.validate().is_ok());
        let span = result.tree.span(result.tree.root());
        prop_assert_eq!(span.end as usize, source.len());
    }

    #[test]
    fn diagnostics_are_in_source_order(source in java_fragment()) {
        let result = parse(&source);
        let starts: Vec<u32> = result.diagnostics.iter().map(|d| d.span.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        prop_assert_eq!(starts, sorted);
    }
}
