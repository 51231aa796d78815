use brew_diagnostic::ErrorCode;
use brew_ir::{NodeKind, Span, TokenKind, WildcardBound};
use pretty_assertions::assert_eq;

use crate::grammar::test_util::{parse_err, parse_with, sexpr};
use crate::{Parser, TokenCursor};

fn ty(source: &str) -> String {
    let result = parse_with(source, Parser::parse_type);
    assert!(result.is_clean(), "{source}: {:?}", result.diagnostics);
    sexpr(&result.tree, result.tree.root(), source)
}

#[test]
fn primitive_and_qualified_types() {
    assert_eq!(ty("int"), "(TypeRef int)");
    assert_eq!(ty("java.util.Map"), "(TypeRef java.util.Map)");
    assert_eq!(ty("byte[][]"), "(TypeRef byte[][])");
}

#[test]
fn nested_type_arguments_close_on_single_greater_than() {
    assert_eq!(
        ty("Map<String, List<Integer>>"),
        "(TypeRef Map (TypeRef String) (TypeRef List (TypeRef Integer)))"
    );
    assert_eq!(
        ty("A<B<C<D>>>"),
        "(TypeRef A (TypeRef B (TypeRef C (TypeRef D))))"
    );
}

#[test]
fn type_arguments_on_inner_segments() {
    assert_eq!(
        ty("Outer<K>.Inner<V>[]"),
        "(TypeRef Outer.Inner[] (TypeRef K) (TypeRef V))"
    );
}

#[test]
fn wildcards() {
    let source = "Map<?, ? extends Number>";
    let result = parse_with(source, Parser::parse_type);
    let tree = &result.tree;
    let args = tree.type_arguments(tree.root());
    assert_eq!(args.len(), 2);
    assert_eq!(tree.kind(args[0]), NodeKind::Wildcard { bound: WildcardBound::Unbounded });
    assert_eq!(tree.kind(args[1]), NodeKind::Wildcard { bound: WildcardBound::Extends });
    assert_eq!(tree.children(args[1]).len(), 1);
    assert_eq!(ty("List<? super T>"), "(TypeRef List (Wildcard (TypeRef T)))");
}

#[test]
fn diamond_has_no_arguments() {
    assert_eq!(ty("ArrayList<>"), "(TypeRef ArrayList)");
}

#[test]
fn type_span_covers_arguments_and_dims() {
    let source = "List<String>[] rest";
    let result = parse_with(source, Parser::parse_type);
    assert_eq!(result.tree.span(result.tree.root()), Span::new(0, 14));
}

#[test]
fn non_type_token_is_expected_type() {
    let err = parse_err("42", Parser::parse_type);
    assert_eq!(err.code, ErrorCode::ExpectedType);
    assert_eq!(err.message, "expected type, found integer literal");
}

#[test]
fn unclosed_type_arguments() {
    let err = parse_err("List<String", Parser::parse_type);
    assert_eq!(err.code, ErrorCode::UnbalancedDelimiter);
}

#[test]
fn type_parameters_with_bounds() {
    let source = "<T extends Comparable<T> & Serializable, U>";
    let result = parse_with(source, Parser::parse_type_parameters);
    assert!(result.is_clean());
    assert_eq!(
        sexpr(&result.tree, result.tree.root(), source),
        "(TypeParameters (TypeParam T (TypeRef Comparable (TypeRef T)) (TypeRef Serializable)) (TypeParam U))"
    );
}

// ─── Lookahead ─────────────────────────────────────────────────────

fn parser(source: &str) -> Parser<'_> {
    Parser::new(TokenCursor::from_source(source))
}

#[test]
fn type_arguments_end_counts_to_matching_close() {
    let mut p = parser("<String, List<Integer>> x");
    assert_eq!(p.type_arguments_end(), Some(8));
    assert_eq!(p.cursor.position(), 0);
}

#[test]
fn less_than_followed_by_expression_is_not_type_arguments() {
    assert_eq!(parser("< n; i++").type_arguments_end(), None);
    assert_eq!(parser("< b)").type_arguments_end(), None);
    assert_eq!(parser("< 3 > x").type_arguments_end(), None);
    assert_eq!(parser("x").type_arguments_end(), None);
}

#[test]
fn speculate_always_rewinds() {
    let mut p = parser("List<String> xs = null;");
    assert!(p.speculate(|p| p.skip_type()));
    assert_eq!(p.current_kind(), TokenKind::Ident);
    assert_eq!(p.cursor.position(), 0);
    assert!(!p.speculate(|p| {
        p.advance();
        false
    }));
    assert_eq!(p.cursor.position(), 0);
}

#[test]
fn skip_type_stops_before_comparison() {
    let mut p = parser("i < n;");
    assert!(p.skip_type());
    assert_eq!(p.current_kind(), TokenKind::Lt);
}

#[test]
fn local_var_decl_detection() {
    assert!(parser("int x = 1;").at_local_var_decl());
    assert!(parser("List<String> xs;").at_local_var_decl());
    assert!(parser("Map.Entry<K, V> e, f;").at_local_var_decl());
    assert!(parser("String[] parts = null;").at_local_var_decl());
    assert!(parser("int a[];").at_local_var_decl());
    assert!(parser("String s : list").at_local_var_decl());
    assert!(!parser("a < b;").at_local_var_decl());
    assert!(!parser("x = 1;").at_local_var_decl());
    assert!(!parser("foo(bar);").at_local_var_decl());
    assert!(!parser("a.b.c();").at_local_var_decl());
    assert!(!parser("i++;").at_local_var_decl());
}

#[test]
fn dims_saturate() {
    let source = "int".to_owned() + &"[]".repeat(300);
    let result = parse_with(&source, Parser::parse_type);
    let NodeKind::TypeRef { dims, .. } = result.tree.kind(result.tree.root()) else {
        panic!("expected a type reference");
    };
    assert_eq!(dims, u8::MAX);
}
