//! Helpers shared by the grammar unit tests.

use std::fmt::Write;

use brew_ir::{NodeId, NodeKind, SyntaxTree};

use crate::{ParseError, ParseResult, Parser, TokenCursor};

/// Run one production over `source` and finish the parse with its node as
/// the root. Panics if the production itself fails.
pub(crate) fn parse_with<'src>(
    source: &'src str,
    production: impl FnOnce(&mut Parser<'src>) -> Result<NodeId, ParseError>,
) -> ParseResult {
    let mut parser = Parser::new(TokenCursor::from_source(source));
    let root = production(&mut parser).unwrap_or_else(|err| panic!("{err}"));
    parser.finish(root, None)
}

/// Run one production and return its error.
pub(crate) fn parse_err<'src>(
    source: &'src str,
    production: impl FnOnce(&mut Parser<'src>) -> Result<NodeId, ParseError>,
) -> ParseError {
    let mut parser = Parser::new(TokenCursor::from_source(source));
    match production(&mut parser) {
        Ok(_) => panic!("expected `{source}` to fail"),
        Err(err) => err,
    }
}

/// Parse an expression and render it as an s-expression.
pub(crate) fn expr(source: &str) -> String {
    let result = parse_with(source, Parser::parse_expr);
    assert!(result.is_clean(), "{source}: {:?}", result.diagnostics);
    sexpr(&result.tree, result.tree.root(), source)
}

/// Render a subtree compactly.
///
/// Names and literals print as their source text; every other node prints
/// as `(Label payload children...)`.
pub(crate) fn sexpr(tree: &SyntaxTree, id: NodeId, source: &str) -> String {
    let kind = tree.kind(id);
    match kind {
        NodeKind::Name { .. } | NodeKind::Literal(_) => {
            return tree.span(id).text(source).to_owned();
        }
        _ => {}
    }

    let mut out = format!("({}", kind.label());
    match kind {
        NodeKind::Binary(op) => write!(out, " {}", op.symbol()).unwrap(),
        NodeKind::Assign(op) => write!(out, " {}", op.symbol()).unwrap(),
        NodeKind::Unary(op) => write!(out, " {}", op.symbol()).unwrap(),
        NodeKind::Postfix(op) => write!(out, " {}", op.symbol()).unwrap(),
        NodeKind::TypeRef { name, dims } => {
            write!(out, " {}{}", tree.name(name), "[]".repeat(usize::from(dims))).unwrap();
        }
        _ => {
            if let Some(name) = tree.name_of(id) {
                write!(out, " {name}").unwrap();
            }
        }
    }
    for &child in tree.children(id) {
        out.push(' ');
        out.push_str(&sexpr(tree, child, source));
    }
    out.push(')');
    out
}

/// Number of nodes labelled `label` reachable from the root.
pub(crate) fn count(tree: &SyntaxTree, label: &str) -> usize {
    tree.descendants(tree.root())
        .filter(|&id| tree.kind(id).label() == label)
        .count()
}
