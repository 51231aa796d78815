//! Grammar modules.
//!
//! Each module extends `Parser` with methods for one group of productions:
//!
//! - [`item`]: compilation unit, imports, type declarations, members,
//!   modifiers and annotations
//! - [`ty`]: type references, type arguments and parameters, and the
//!   lookahead that tells a type from an expression
//! - [`stmt`]: blocks and statements, including try and switch
//! - [`expr`]: expressions, by precedence climbing
//!
//! Every routine returns `Result<NodeId, ParseError>`. List loops (members,
//! block statements, switch groups, top-level declarations) catch the error,
//! resynchronize and keep going.

mod expr;
mod item;
mod stmt;
mod ty;

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
pub(crate) mod test_util;
