//! Whole-file parses of the sample programs under `tests/fixtures`.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use brew_ir::{NodeId, NodeKind, SyntaxTree};
use brew_parse::{parse, parse_with_options, ParseOptions, ParseResult};
use pretty_assertions::assert_eq;

const EXAMPLE_1: &str = include_str!("fixtures/example-1.java");
const EXAMPLE_2: &str = include_str!("fixtures/example-2.java");

fn parse_clean(source: &str) -> ParseResult {
    let result = parse(source);
    assert!(result.is_clean(), "unexpected diagnostics: {:#?}", result.diagnostics);
    let tree = &result.tree;
    let len = u32::try_from(source.len()).unwrap();
    assert_eq!(tree.span(tree.root()).start, 0);
    assert_eq!(tree.span(tree.root()).end, len);
    tree.validate().unwrap();
    result
}

fn find_all(tree: &SyntaxTree, pred: impl Fn(NodeKind) -> bool) -> Vec<NodeId> {
    tree.descendants(tree.root())
        .filter(|&id| pred(tree.kind(id)))
        .collect()
}

fn type_names(tree: &SyntaxTree) -> Vec<&str> {
    tree.children(tree.root())
        .iter()
        .filter(|&&id| tree.kind(id).is_type_decl())
        .filter_map(|&id| tree.name_of(id))
        .collect()
}

#[test]
fn example_1_parses_cleanly() {
    let result = parse_clean(EXAMPLE_1);
    let tree = &result.tree;
    assert_eq!(
        type_names(tree),
        ["TryWithResourcesDemo", "MultiCatchExample", "StringSwitchDemo"]
    );

    let import = tree.child(tree.root(), 0).unwrap();
    assert!(matches!(
        tree.kind(import),
        NodeKind::ImportDecl { is_wildcard: true, .. }
    ));
    assert_eq!(tree.name_of(import), Some("java.io.*"));
}

#[test]
fn example_1_try_with_resources() {
    let result = parse_clean(EXAMPLE_1);
    let tree = &result.tree;
    let resources = find_all(tree, |k| matches!(k, NodeKind::Resource { .. }));
    assert_eq!(resources.len(), 1);
    assert_eq!(tree.name_of(resources[0]), Some("br"));
    let init = tree.child(resources[0], 2).unwrap();
    assert_eq!(tree.kind(init), NodeKind::NewObject);
}

#[test]
fn example_1_multi_catch_keeps_source_order() {
    let result = parse_clean(EXAMPLE_1);
    let tree = &result.tree;
    let catches = find_all(tree, |k| matches!(k, NodeKind::CatchClause { .. }));
    assert_eq!(catches.len(), 2);
    assert_eq!(tree.catch_types(catches[0]), ["IOException"]);
    assert_eq!(
        tree.catch_types(catches[1]),
        ["ArithmeticException", "NullPointerException"]
    );
}

#[test]
fn example_1_string_switch() {
    let result = parse_clean(EXAMPLE_1);
    let tree = &result.tree;
    let switches = find_all(tree, |k| k == NodeKind::Switch);
    assert_eq!(switches.len(), 1);
    let groups: Vec<_> = tree.children(switches[0])[1..].to_vec();
    assert_eq!(groups.len(), 3);
    let last_label = tree.child(groups[2], 0).unwrap();
    assert_eq!(tree.kind(last_label), NodeKind::CaseLabel { is_default: true });
    let first_label = tree.child(groups[0], 0).unwrap();
    let value = tree.child(first_label, 0).unwrap();
    assert_eq!(tree.span(value).text(EXAMPLE_1), "\"MONDAY\"");
}

#[test]
fn example_2_parses_cleanly() {
    let result = parse_clean(EXAMPLE_2);
    assert_eq!(type_names(&result.tree), ["SumTask", "ForkJoinExample"]);
}

#[test]
fn example_2_superclass_type_argument() {
    let result = parse_clean(EXAMPLE_2);
    let tree = &result.tree;
    let sum_task = tree
        .children(tree.root())
        .iter()
        .copied()
        .find(|&id| tree.name_of(id) == Some("SumTask"))
        .unwrap();
    let extends = tree
        .find_child(sum_task, |k| k == NodeKind::Extends)
        .unwrap();
    let superclass = tree.child(extends, 0).unwrap();
    assert_eq!(tree.name_of(superclass), Some("RecursiveTask"));
    let args = tree.type_arguments(superclass);
    assert_eq!(args.len(), 1);
    assert_eq!(tree.name_of(args[0]), Some("Integer"));
}

#[test]
fn example_2_fields_and_members() {
    let result = parse_clean(EXAMPLE_2);
    let tree = &result.tree;
    let fields = find_all(tree, |k| k == NodeKind::FieldDecl);
    assert_eq!(fields.len(), 2);
    let declarators: Vec<_> = tree.children(fields[1])[2..]
        .iter()
        .filter_map(|&id| tree.name_of(id))
        .collect();
    assert_eq!(declarators, ["start", "end"]);

    let array_field_type = tree.child(fields[0], 1).unwrap();
    assert!(matches!(
        tree.kind(array_field_type),
        NodeKind::TypeRef { dims: 1, .. }
    ));

    let ctors = find_all(tree, |k| matches!(k, NodeKind::ConstructorDecl { .. }));
    assert_eq!(ctors.len(), 1);
    let methods = find_all(tree, |k| matches!(k, NodeKind::MethodDecl { .. }));
    let names: Vec<_> = methods.iter().filter_map(|&id| tree.name_of(id)).collect();
    assert_eq!(names, ["compute", "main"]);

    let compute_modifiers = tree.child(methods[0], 0).unwrap();
    let annotation = tree.child(compute_modifiers, 0).unwrap();
    assert_eq!(tree.name_of(annotation), Some("Override"));
}

#[test]
fn example_2_array_initializer() {
    let result = parse_clean(EXAMPLE_2);
    let tree = &result.tree;
    let inits = find_all(tree, |k| k == NodeKind::ArrayInit);
    assert_eq!(inits.len(), 1);
    assert_eq!(tree.children(inits[0]).len(), 10);
}

#[test]
fn samples_concatenated_parse_cleanly() {
    let source = format!("{EXAMPLE_1}\n{EXAMPLE_2}");
    let result = parse_clean(&source);
    assert_eq!(type_names(&result.tree).len(), 5);
}

#[test]
fn offset_parse_skips_prefix() {
    let prefix = "this is not java @@@\n";
    let source = format!("{prefix}{EXAMPLE_2}");
    let options = ParseOptions::new()
        .with_file_name("example-2.java")
        .with_offset(u32::try_from(prefix.len()).unwrap());
    let result = parse_with_options(&source, &options);
    assert!(result.is_clean(), "{:#?}", result.diagnostics);
    assert_eq!(type_names(&result.tree), ["SumTask", "ForkJoinExample"]);
}
