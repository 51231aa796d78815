use brew_diagnostic::ErrorCode;
use brew_ir::{NodeKind, Span};
use pretty_assertions::assert_eq;

use super::INSTANCEOF_PRECEDENCE;
use crate::grammar::test_util::{expr, parse_err, parse_with, sexpr};
use crate::Parser;

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expr("a + b * c"), "(Binary + a (Binary * b c))");
    assert_eq!(expr("a * b + c"), "(Binary + (Binary * a b) c)");
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(expr("a - b - c"), "(Binary - (Binary - a b) c)");
    assert_eq!(expr("a / b % c"), "(Binary % (Binary / a b) c)");
}

#[test]
fn logical_and_binds_tighter_than_or() {
    assert_eq!(expr("a || b && c"), "(Binary || a (Binary && b c))");
    assert_eq!(expr("a | b ^ c & d"), "(Binary | a (Binary ^ b (Binary & c d)))");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(expr("a = b += c"), "(Assign = a (Assign += b c))");
    assert_eq!(expr("x <<= 2"), "(Assign <<= x 2)");
}

#[test]
fn conditional_nests_to_the_right() {
    assert_eq!(expr("a ? b : c ? d : e"), "(Conditional a b (Conditional c d e))");
    assert_eq!(expr("a ? b = 1 : c"), "(Conditional a (Assign = b 1) c)");
}

#[test]
fn adjacent_greater_than_tokens_compose() {
    assert_eq!(expr("a > b"), "(Binary > a b)");
    assert_eq!(expr("a >= b"), "(Binary >= a b)");
    assert_eq!(expr("a >> b"), "(Binary >> a b)");
    assert_eq!(expr("a >>> 2"), "(Binary >>> a 2)");
    assert_eq!(expr("x >>= 1"), "(Assign >>= x 1)");
    assert_eq!(expr("x >>>= 1"), "(Assign >>>= x 1)");
}

#[test]
fn separated_greater_than_tokens_do_not_compose() {
    let err = parse_err("a > > b", Parser::parse_expr);
    assert_eq!(err.code, ErrorCode::ExpectedExpression);
    assert_eq!(err.span, Span::new(4, 5));
}

#[test]
fn shift_binds_tighter_than_comparison() {
    assert_eq!(expr("a >> 1 < b"), "(Binary < (Binary >> a 1) b)");
}

#[test]
fn instanceof_sits_at_relational_level() {
    assert_eq!(INSTANCEOF_PRECEDENCE, brew_ir::BinaryOp::Lt.precedence());
    assert_eq!(
        expr("a instanceof String && b"),
        "(Binary && (InstanceOf a (TypeRef String)) b)"
    );
    assert_eq!(
        expr("a == b instanceof List<?>"),
        "(Binary == a (InstanceOf b (TypeRef List (Wildcard))))"
    );
}

#[test]
fn prefix_and_postfix_operators() {
    assert_eq!(expr("-a * b"), "(Binary * (Unary - a) b)");
    assert_eq!(expr("!!a"), "(Unary ! (Unary ! a))");
    assert_eq!(expr("++i"), "(Unary ++ i)");
    assert_eq!(expr("i++ + 1"), "(Binary + (Postfix ++ i) 1)");
    assert_eq!(expr("~mask"), "(Unary ~ mask)");
}

#[test]
fn casts_are_told_apart_from_parentheses() {
    assert_eq!(expr("(int) x"), "(Cast (TypeRef int) x)");
    assert_eq!(expr("(String) obj"), "(Cast (TypeRef String) obj)");
    assert_eq!(expr("(int[]) o"), "(Cast (TypeRef int[]) o)");
    assert_eq!(
        expr("(List<String>) o"),
        "(Cast (TypeRef List (TypeRef String)) o)"
    );
    assert_eq!(expr("(a) + b"), "(Binary + (Paren a) b)");
    assert_eq!(expr("(a < b)"), "(Paren (Binary < a b))");
}

#[test]
fn primitive_cast_accepts_signed_operand() {
    assert_eq!(expr("(int) -1"), "(Cast (TypeRef int) (Unary - 1))");
    assert_eq!(expr("(Integer) -1"), "(Binary - (Paren Integer) 1)");
}

#[test]
fn postfix_chains() {
    assert_eq!(
        expr("a.b.c(d)[0]"),
        "(ArrayAccess (MethodCall c (FieldAccess b a) (Arguments d)) 0)"
    );
    assert_eq!(expr("foo(1, 2)"), "(MethodCall foo (Arguments 1 2))");
    assert_eq!(
        expr("Collections.<String>emptyList()"),
        "(MethodCall emptyList Collections (Arguments))"
    );
}

#[test]
fn this_and_super() {
    assert_eq!(expr("this.x"), "(FieldAccess x (This))");
    assert_eq!(expr("super.foo()"), "(MethodCall foo (Super) (Arguments))");
    assert_eq!(expr("Outer.this"), "(FieldAccess this Outer)");
    assert_eq!(expr("this(1)"), "(ExplicitCtorCall (Arguments 1))");
}

#[test]
fn class_literals() {
    assert_eq!(expr("String.class"), "(ClassLiteral (TypeRef String))");
    assert_eq!(expr("int[].class"), "(ClassLiteral (TypeRef int[]))");
    assert_eq!(
        expr("java.util.List.class"),
        "(ClassLiteral (TypeRef java.util.List))"
    );
    assert_eq!(expr("void.class"), "(ClassLiteral (TypeRef void))");
}

#[test]
fn object_creation() {
    assert_eq!(expr("new ArrayList<>()"), "(NewObject (TypeRef ArrayList) (Arguments))");
    assert_eq!(
        expr("new HashMap<String, List<Integer>>()"),
        "(NewObject (TypeRef HashMap (TypeRef String) (TypeRef List (TypeRef Integer))) (Arguments))"
    );
}

#[test]
fn anonymous_class_body() {
    let source = "new Runnable() { public void run() {} }";
    let result = parse_with(source, Parser::parse_expr);
    assert!(result.is_clean());
    let tree = &result.tree;
    let root = tree.root();
    assert_eq!(tree.kind(root), NodeKind::NewObject);
    assert_eq!(tree.children(root).len(), 3);
    let body = tree.child(root, 2).unwrap();
    assert_eq!(tree.kind(body), NodeKind::ClassBody);
}

#[test]
fn array_creation() {
    assert_eq!(expr("new int[n][]"), "(NewArray (TypeRef int[][]) n)");
    assert_eq!(expr("new String[2][3]"), "(NewArray (TypeRef String[][]) 2 3)");
    assert_eq!(
        expr("new int[] {1, 2,}"),
        "(NewArray (TypeRef int[]) (ArrayInit 1 2))"
    );
    assert_eq!(
        expr("new int[][] {{1}, {}}"),
        "(NewArray (TypeRef int[][]) (ArrayInit (ArrayInit 1) (ArrayInit)))"
    );
}

#[test]
fn array_creation_type_excludes_brackets() {
    let source = "new int[4][]";
    let result = parse_with(source, Parser::parse_expr);
    let tree = &result.tree;
    let ty = tree.child(tree.root(), 0).unwrap();
    assert_eq!(tree.span(ty).text(source), "int");
    assert_eq!(tree.span(tree.root()), Span::new(0, 12));
}

#[test]
fn array_creation_needs_size_or_initializer() {
    let err = parse_err("new int[]", Parser::parse_expr);
    assert_eq!(err.code, ErrorCode::UnexpectedToken);
}

#[test]
fn literal_kinds() {
    assert_eq!(
        expr("'a' + \"s\" + 1.5f + 0x1F"),
        "(Binary + (Binary + (Binary + 'a' \"s\") 1.5f) 0x1F)"
    );
    assert_eq!(expr("x == null || y != true"), "(Binary || (Binary == x null) (Binary != y true))");
}

#[test]
fn lexer_error_token_becomes_silent_error_node() {
    let source = "a + #";
    let result = parse_with(source, Parser::parse_expr);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].code, ErrorCode::IllegalCharacter);
    assert_eq!(
        sexpr(&result.tree, result.tree.root(), source),
        "(Binary + a (Error))"
    );
}

#[test]
fn missing_operand_is_an_error() {
    let err = parse_err("a +", Parser::parse_expr);
    assert_eq!(err.code, ErrorCode::ExpectedExpression);
    assert_eq!(err.message, "expected expression, found end of file");
}

#[test]
fn unclosed_paren_points_at_opener() {
    let err = parse_err("(a + b", Parser::parse_expr);
    assert_eq!(err.code, ErrorCode::UnbalancedDelimiter);
    assert_eq!(err.note.as_deref(), Some("unclosed `(` opened at 1:1"));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let result = parse_with(&source, Parser::parse_expr);
    assert!(result.is_clean());
    assert_eq!(result.tree.len(), depth + 1);
}

#[test]
fn spans_cover_operands() {
    let source = "a + b * c";
    let result = parse_with(source, Parser::parse_expr);
    let tree = &result.tree;
    assert_eq!(tree.span(tree.root()), Span::new(0, 9));
    let right = tree.child(tree.root(), 1).unwrap();
    assert_eq!(tree.span(right).text(source), "b * c");
    assert!(tree.validate().is_ok());
}

#[test]
fn bare_primitive_type_is_not_an_expression() {
    let err = parse_err("int = 1", Parser::parse_expr);
    assert_eq!(err.code, ErrorCode::ExpectedExpression);
    assert_eq!(err.message, "expected expression, found `int`");
    assert_eq!(err.span, Span::new(0, 3));

    let err = parse_err("x + void", Parser::parse_expr);
    assert_eq!(err.code, ErrorCode::ExpectedExpression);
    assert_eq!(err.span, Span::new(4, 8));
}
