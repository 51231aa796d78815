//! Arena-allocated syntax tree.
//!
//! Nodes live in one flat `Vec` and refer to their children by [`NodeId`].
//! Children are always allocated before their parent, and each parent's
//! child list is stored contiguously in a shared `child_ids` vector, so a
//! node's children are a single slice and the whole tree frees or moves as
//! one allocation.
//!
//! Assembly happens through [`TreeBuilder`], which is consumed by
//! [`TreeBuilder::finish`]. [`SyntaxTree`] exposes traversal only.

mod kind;

pub use kind::{AssignOp, BinaryOp, LiteralKind, NodeKind, PostfixOp, UnaryOp, WildcardBound};

use std::fmt;

use crate::{Name, Span, StringInterner};

/// Index into the node arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    children_start: u32,
    children_len: u32,
}

/// Builder for a [`SyntaxTree`]. Owned by exactly one parse.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    child_ids: Vec<NodeId>,
    interner: StringInterner,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern identifier text for use in a [`NodeKind`].
    #[inline]
    pub fn intern(&mut self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Look up interned text while building.
    #[inline]
    pub fn lookup(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Allocate a node owning `children`.
    ///
    /// Each child must have been allocated by this builder and must not
    /// already belong to another parent.
    ///
    /// # Panics
    ///
    /// Panics if the arena grows past `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: NodeKind, span: Span, children: &[NodeId]) -> NodeId {
        debug_assert!(
            children.iter().all(|c| c.index() < self.nodes.len()),
            "child allocated after its parent"
        );
        let id = NodeId(Self::to_u32(self.nodes.len()));
        let children_start = Self::to_u32(self.child_ids.len());
        self.child_ids.extend_from_slice(children);
        self.nodes.push(NodeData {
            kind,
            span,
            children_start,
            children_len: Self::to_u32(children.len()),
        });
        id
    }

    /// Span of an already-allocated node.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Kind of an already-allocated node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.index()].kind
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Freeze the arena into a read-only tree rooted at `root`.
    pub fn finish(self, root: NodeId) -> SyntaxTree {
        SyntaxTree {
            nodes: self.nodes,
            child_ids: self.child_ids,
            interner: self.interner,
            root,
        }
    }

    fn to_u32(n: usize) -> u32 {
        u32::try_from(n).unwrap_or_else(|_| panic!("syntax tree exceeds u32::MAX entries"))
    }
}

/// Immutable syntax tree produced by one parse.
///
/// Safe to share across threads once built.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    child_ids: Vec<NodeId>,
    interner: StringInterner,
    root: NodeId,
}

impl SyntaxTree {
    /// The `CompilationUnit` root.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.index()].kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.nodes[id.index()].span
    }

    /// Children of `id` in source order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        let data = &self.nodes[id.index()];
        let start = data.children_start as usize;
        &self.child_ids[start..start + data.children_len as usize]
    }

    /// The `index`-th child of `id`, if any.
    #[inline]
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    /// Text of an interned name.
    #[inline]
    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// Text of the identifier carried by `id`'s kind, if it has one.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.kind(id).name().map(|n| self.name(n))
    }

    /// Borrowing view of a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, id }
    }

    /// Total number of nodes in the arena.
    ///
    /// Includes nodes allocated by productions that later failed. Those
    /// have no parent and are not reachable from the root, so this can
    /// exceed `self.descendants(self.root()).count()`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order iterator over `id` and all of its descendants.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// First child of `id` whose kind satisfies `pred`.
    pub fn find_child(&self, id: NodeId, pred: impl Fn(NodeKind) -> bool) -> Option<NodeId> {
        self.children(id).iter().copied().find(|&c| pred(self.kind(c)))
    }

    /// Exception type names listed by a `CatchClause`, in source order.
    ///
    /// Returns an empty vector for any other node kind.
    pub fn catch_types(&self, id: NodeId) -> Vec<&str> {
        if !matches!(self.kind(id), NodeKind::CatchClause { .. }) {
            return Vec::new();
        }
        self.children(id)
            .iter()
            .filter_map(|&c| match self.kind(c) {
                NodeKind::TypeRef { name, .. } => Some(self.name(name)),
                _ => None,
            })
            .collect()
    }

    /// Generic type arguments of a `TypeRef`, in source order.
    pub fn type_arguments(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::TypeRef { .. } => self.children(id),
            _ => &[],
        }
    }

    /// Check the structural invariants: every child span lies within its
    /// parent's span, siblings are ordered and non-overlapping, no node has
    /// more than one parent, and the root has none.
    ///
    /// Nodes left behind by an abandoned production have no parent and are
    /// unreachable from the root; they are not reported.
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        let mut parent_count = vec![0u32; self.nodes.len()];
        for (index, data) in self.nodes.iter().enumerate() {
            let start = data.children_start as usize;
            let children = &self.child_ids[start..start + data.children_len as usize];
            let mut prev_end = data.span.start;
            for &child in children {
                if child.index() >= index {
                    return Err(format!("{child:?} is not allocated before parent {index}"));
                }
                parent_count[child.index()] += 1;
                let span = self.span(child);
                if !data.span.contains_span(span) {
                    return Err(format!(
                        "{} {span} escapes parent {} {}",
                        self.kind(child).label(),
                        data.kind.label(),
                        data.span
                    ));
                }
                if span.start < prev_end {
                    return Err(format!(
                        "{} {span} overlaps its previous sibling",
                        self.kind(child).label()
                    ));
                }
                prev_end = span.end;
            }
        }
        for (index, &count) in parent_count.iter().enumerate() {
            if count > 1 || (index == self.root.index() && count != 0) {
                return Err(format!("node {index} has {count} parents"));
            }
        }
        Ok(())
    }
}

/// A node together with the tree that owns it.
#[derive(Copy, Clone)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.tree.kind(self.id)
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.tree.span(self.id)
    }

    /// Child views in source order.
    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .map(move |&id| SyntaxNode { tree, id })
    }

    pub fn child(&self, index: usize) -> Option<SyntaxNode<'t>> {
        self.tree
            .child(self.id, index)
            .map(|id| SyntaxNode { tree: self.tree, id })
    }

    pub fn child_count(&self) -> usize {
        self.tree.children(self.id).len()
    }

    /// Identifier text carried by this node's kind, if any.
    pub fn name(&self) -> Option<&'t str> {
        self.tree.name_of(self.id)
    }

    /// Source text covered by this node.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span().text(source)
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind().label(), self.span())
    }
}

/// Pre-order traversal produced by [`SyntaxTree::descendants`].
pub struct Descendants<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
