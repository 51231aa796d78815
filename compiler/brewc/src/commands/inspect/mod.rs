//! Inspection commands: `lex`, `parse` and `tree`.

use std::io::{self, Write};
use std::path::Path;

use brew_ir::{NodeId, NodeKind, SyntaxTree};
use brew_parse::{ParseOptions, ParseResult};

use super::read_file;
use crate::error::DriverError;

/// Lex a file and print the token stream.
///
/// Returns `true` if the lexer reported errors.
pub fn lex_file<W: Write>(out: &mut W, path: &Path) -> Result<bool, DriverError> {
    let source = read_file(path)?;
    Ok(write_tokens(out, &path.display().to_string(), &source)?)
}

/// Parse a file and print a summary of its declarations and diagnostics.
///
/// Returns `true` if the parse reported errors.
pub fn parse_file<W: Write>(out: &mut W, path: &Path) -> Result<bool, DriverError> {
    let source = read_file(path)?;
    let name = path.display().to_string();
    let result = brew_parse::parse_with_options(&source, &ParseOptions::new().with_file_name(&name));
    write_summary(out, &name, &source, &result)?;
    Ok(result.has_errors())
}

/// Parse a file and print the whole syntax tree.
///
/// Returns `true` if the parse reported errors.
pub fn tree_file<W: Write>(out: &mut W, path: &Path) -> Result<bool, DriverError> {
    let source = read_file(path)?;
    let result = brew_parse::parse(&source);
    write_tree(out, &result.tree, &source)?;
    Ok(result.has_errors())
}

/// Print one line per token, then any lexer errors.
pub fn write_tokens<W: Write>(out: &mut W, name: &str, source: &str) -> io::Result<bool> {
    let output = brew_lexer::lex(source);
    writeln!(out, "Tokens for '{name}' ({} tokens):", output.tokens.len())?;
    for token in &output.tokens {
        let text = token.text(source);
        if text.is_empty() {
            writeln!(out, "  {:?} @ {}", token.kind, token.start)?;
        } else {
            writeln!(out, "  {:?} @ {} {text:?}", token.kind, token.start)?;
        }
    }
    if output.has_errors() {
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for error in &output.errors {
            writeln!(out, "  {}: {}", error.span, error.message())?;
        }
    }
    Ok(output.has_errors())
}

/// Print the type declarations of a parse and its diagnostic counts.
pub fn write_summary<W: Write>(
    out: &mut W,
    name: &str,
    source: &str,
    result: &ParseResult,
) -> io::Result<()> {
    let tree = &result.tree;
    let root = tree.root();

    writeln!(out, "Parse result for '{name}':")?;
    writeln!(out, "  Nodes: {}", tree.len())?;
    writeln!(out, "  Errors: {}", result.errors().count())?;
    writeln!(out, "  Warnings: {}", result.warnings().count())?;

    let decls: Vec<NodeId> = tree
        .descendants(root)
        .filter(|&id| tree.kind(id).is_type_decl())
        .collect();
    if !decls.is_empty() {
        writeln!(out)?;
        writeln!(out, "Types:")?;
        for id in decls {
            let members = tree
                .find_child(id, |k| k == NodeKind::ClassBody)
                .map_or(0, |body| tree.children(body).len());
            writeln!(
                out,
                "  {} {} ({members} members)",
                keyword(tree.kind(id)),
                tree.name_of(id).unwrap_or("?"),
            )?;
        }
    }

    if !result.diagnostics.is_empty() {
        writeln!(out)?;
        writeln!(out, "Diagnostics:")?;
        for diag in &result.diagnostics {
            writeln!(
                out,
                "  {}: {}[{}]: {} `{}`",
                diag.span,
                diag.severity,
                diag.code.as_str(),
                diag.message,
                diag.span.text(source).escape_debug(),
            )?;
        }
    }
    Ok(())
}

fn keyword(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::InterfaceDecl { .. } => "interface",
        NodeKind::EnumDecl { .. } => "enum",
        _ => "class",
    }
}

/// Print an indented outline of `tree`, one node per line.
///
/// Iterative so arbitrarily deep trees cannot overflow the stack.
pub fn write_tree<W: Write>(out: &mut W, tree: &SyntaxTree, source: &str) -> io::Result<()> {
    let mut stack = vec![(tree.root(), 0usize)];
    while let Some((id, depth)) = stack.pop() {
        write!(out, "{:indent$}{}", "", tree.kind(id).label(), indent = depth * 2)?;
        match tree.kind(id) {
            NodeKind::Binary(op) => write!(out, " {}", op.symbol())?,
            NodeKind::Assign(op) => write!(out, " {}", op.symbol())?,
            NodeKind::Unary(op) => write!(out, " {}", op.symbol())?,
            NodeKind::Postfix(op) => write!(out, " {}", op.symbol())?,
            NodeKind::Literal(_) => write!(out, " {}", tree.span(id).text(source))?,
            NodeKind::TypeRef { name, dims } => {
                write!(out, " {}{}", tree.name(name), "[]".repeat(usize::from(dims)))?;
            }
            _ => {
                if let Some(name) = tree.name_of(id) {
                    write!(out, " {name}")?;
                }
            }
        }
        writeln!(out, " @ {}", tree.span(id))?;
        stack.extend(tree.children(id).iter().rev().map(|&c| (c, depth + 1)));
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
