//! The taxonomy engine handle.
//!
//! One [`Taxonomy`] owns one tree. Mutators live in `mutate.rs`, lookups in
//! `lookup.rs`, path reconstruction in `path.rs`, traversal in `walk.rs`.

use tracing::{debug, instrument};

use crate::domain::arena::{NodeRef, TreeArena};
use crate::domain::error::DomainResult;
use crate::domain::node::Tree;

#[derive(Debug, Default, Clone)]
pub struct Taxonomy {
    pub(crate) tree: TreeArena,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self {
            tree: TreeArena::new(),
        }
    }

    /// Owned snapshot of the whole tree.
    pub fn get_tree(&self) -> Tree {
        Tree {
            roots: self
                .tree
                .roots()
                .iter()
                .filter_map(|&r| self.tree.snapshot(r))
                .collect(),
        }
    }

    /// Replaces the tree with `tree`.
    ///
    /// Every node goes through the same normalization as [`Taxonomy::add_node`].
    /// If any node is rejected the current tree is left untouched.
    #[instrument(level = "debug", skip(self, tree), fields(roots = tree.roots.len()))]
    pub fn set_tree(&mut self, tree: Tree) -> DomainResult<Tree> {
        let mut replacement = Taxonomy::new();
        for root in tree.roots {
            replacement.add_node(root, None, None)?;
        }
        self.tree = replacement.tree;
        debug!(nodes = self.tree.len(), "tree replaced");
        Ok(self.get_tree())
    }

    pub fn get_roots(&self) -> Vec<NodeRef<'_>> {
        self.tree
            .roots()
            .iter()
            .filter_map(|&r| self.tree.node_ref(r))
            .collect()
    }

    /// Empties the tree.
    pub fn clear(&mut self) -> Tree {
        self.tree = TreeArena::new();
        Tree::default()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Pre-order iterator over every node.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.tree.iter()
    }
}
