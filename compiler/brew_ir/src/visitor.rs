//! Syntax tree visitor.
//!
//! Provides generic traversal of a [`SyntaxTree`]. The tree is immutable;
//! the visitor may mutate its own state while walking.
//!
//! Default implementations call [`walk_node`], which visits every child in
//! source order. Override `visit_node` to act on specific kinds and call
//! `walk_node` to continue into children.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl Visitor for CountCalls {
//!     fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId) {
//!         if matches!(tree.kind(id), NodeKind::MethodCall { .. }) {
//!             self.count += 1;
//!         }
//!         walk_node(self, tree, id);
//!     }
//! }
//! ```

use crate::{NodeId, SyntaxTree};

/// Syntax tree visitor trait.
pub trait Visitor {
    /// Visit the whole tree from its root.
    fn visit_tree(&mut self, tree: &SyntaxTree) {
        self.visit_node(tree, tree.root());
    }

    /// Visit one node.
    fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId) {
        walk_node(self, tree, id);
    }
}

/// Visit every child of `id` in source order.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, id: NodeId) {
    for &child in tree.children(id) {
        visitor.visit_node(tree, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeKind, Span, TreeBuilder};

    struct KindCollector {
        labels: Vec<&'static str>,
    }

    impl Visitor for KindCollector {
        fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId) {
            self.labels.push(tree.kind(id).label());
            walk_node(self, tree, id);
        }
    }

    struct SkipBlocks {
        visited: usize,
    }

    impl Visitor for SkipBlocks {
        fn visit_node(&mut self, tree: &SyntaxTree, id: NodeId) {
            self.visited += 1;
            if tree.kind(id) != NodeKind::Block {
                walk_node(self, tree, id);
            }
        }
    }

    fn sample() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let empty = b.alloc(NodeKind::Empty, Span::new(1, 2), &[]);
        let block = b.alloc(NodeKind::Block, Span::new(0, 3), &[empty]);
        let this = b.alloc(NodeKind::This, Span::new(4, 8), &[]);
        let stmt = b.alloc(NodeKind::ExprStmt, Span::new(4, 9), &[this]);
        let root = b.alloc(NodeKind::CompilationUnit, Span::new(0, 9), &[block, stmt]);
        b.finish(root)
    }

    #[test]
    fn visits_in_pre_order() {
        let tree = sample();
        let mut v = KindCollector { labels: Vec::new() };
        v.visit_tree(&tree);
        assert_eq!(
            v.labels,
            ["CompilationUnit", "Block", "Empty", "ExprStmt", "This"]
        );
    }

    #[test]
    fn override_can_prune_subtrees() {
        let tree = sample();
        let mut v = SkipBlocks { visited: 0 };
        v.visit_tree(&tree);
        assert_eq!(v.visited, 4);
    }
}
