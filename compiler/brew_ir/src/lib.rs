//! Brew IR - shared data types for the parser core.
//!
//! This crate contains the data structures every other phase agrees on:
//! - Spans and source positions
//! - Token kinds and tokens produced by the lexer
//! - Interned names
//! - The arena-allocated syntax tree handed to downstream tools
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier text → `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)` indices
//! - **Read-only output**: the tree is assembled by a `TreeBuilder` that is
//!   consumed on `finish()`; callers only ever hold a `SyntaxTree`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod modifiers;
mod name;
mod position;
mod span;
mod token;
pub mod tree;
pub mod visitor;

pub use interner::StringInterner;
pub use modifiers::Modifiers;
pub use name::Name;
pub use position::SourcePosition;
pub use span::Span;
pub use token::{Token, TokenCategory, TokenKind};
pub use tree::{
    AssignOp, BinaryOp, Descendants, LiteralKind, NodeId, NodeKind, PostfixOp, SyntaxNode,
    SyntaxTree, TreeBuilder, UnaryOp, WildcardBound,
};
pub use visitor::Visitor;
