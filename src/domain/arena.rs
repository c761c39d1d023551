use std::fmt;

use generational_arena::{Arena, Index};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::domain::node::{Attributes, Node, SLUG_ATTRIBUTE};

/// Tree node as stored in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: String,
    pub data: Value,
    pub attributes: Attributes,
    pub extra: Map<String, Value>,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in sibling order
    pub children: Vec<Index>,
    pub is_leaf: bool,
}

/// Arena-based forest backing one taxonomy.
///
/// Uses generational arena for memory-safe node references. Roots are kept in
/// insertion order; every other node hangs off exactly one parent.
#[derive(Debug, Default, Clone)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    roots: Vec<Index>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn node_ref(&self, idx: Index) -> Option<NodeRef<'_>> {
        self.get_node(idx).map(|node| NodeRef {
            tree: self,
            idx,
            node,
        })
    }

    pub fn child_count(&self, idx: Index) -> usize {
        self.get_node(idx).map_or(0, |n| n.children.len())
    }

    /// Stores `node` and its descendants, linking it under `parent` at
    /// `position` (append when None) or at the end of the roots.
    ///
    /// Positions are expected to be in range; callers check.
    #[instrument(level = "trace", skip(self, node), fields(id = %node.id))]
    pub fn attach(&mut self, node: Node, parent: Option<Index>, position: Option<usize>) -> Index {
        let node_idx = self.alloc(node, parent);

        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent) => {
                match position {
                    Some(pos) if pos < parent.children.len() => {
                        parent.children.insert(pos, node_idx)
                    }
                    _ => parent.children.push(node_idx),
                }
                parent.is_leaf = false;
            }
            None => self.roots.push(node_idx),
        }

        node_idx
    }

    fn alloc(&mut self, node: Node, parent: Option<Index>) -> Index {
        let Node {
            id,
            data,
            attributes,
            children,
            extra,
            ..
        } = node;
        let node_idx = self.arena.insert(TreeNode {
            id,
            data: data.unwrap_or(Value::Null),
            attributes,
            extra,
            parent,
            children: Vec::with_capacity(children.len()),
            is_leaf: children.is_empty(),
        });

        for child in children {
            let child_idx = self.alloc(child, Some(node_idx));
            if let Some(n) = self.arena.get_mut(node_idx) {
                n.children.push(child_idx);
            }
        }
        node_idx
    }

    /// Unlinks the subtree rooted at `idx` and returns it as an owned node.
    ///
    /// The former parent's leaf flag is recomputed.
    #[instrument(level = "trace", skip(self))]
    pub fn detach(&mut self, idx: Index) -> Option<Node> {
        let parent = self.get_node(idx)?.parent;
        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent) => {
                parent.children.retain(|&c| c != idx);
                parent.is_leaf = parent.children.is_empty();
            }
            None => self.roots.retain(|&r| r != idx),
        }
        self.take(idx)
    }

    fn take(&mut self, idx: Index) -> Option<Node> {
        let node = self.arena.remove(idx)?;
        let children: Vec<Node> = node
            .children
            .into_iter()
            .filter_map(|c| self.take(c))
            .collect();
        Some(Node {
            id: node.id,
            data: Some(node.data),
            attributes: node.attributes,
            is_leaf: children.is_empty(),
            children,
            extra: node.extra,
        })
    }

    /// Owned deep copy of the subtree rooted at `idx`.
    pub fn snapshot(&self, idx: Index) -> Option<Node> {
        let node = self.get_node(idx)?;
        let children: Vec<Node> = node
            .children
            .iter()
            .filter_map(|&c| self.snapshot(c))
            .collect();
        Some(Node {
            id: node.id.clone(),
            data: Some(node.data.clone()),
            attributes: node.attributes.clone(),
            is_leaf: children.is_empty(),
            children,
            extra: node.extra.clone(),
        })
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of levels below and including the deepest root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Borrowed view of a node inside a [`TreeArena`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a TreeArena,
    idx: Index,
    node: &'a TreeNode,
}

impl<'a> NodeRef<'a> {
    pub fn index(&self) -> Index {
        self.idx
    }

    pub fn id(&self) -> &'a str {
        &self.node.id
    }

    pub fn data(&self) -> &'a Value {
        &self.node.data
    }

    pub fn attributes(&self) -> &'a Attributes {
        &self.node.attributes
    }

    pub fn slug(&self) -> Option<&'a Value> {
        self.node.attributes.get(SLUG_ATTRIBUTE)
    }

    pub fn extra(&self) -> &'a Map<String, Value> {
        &self.node.extra
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf
    }

    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        self.node
            .children
            .iter()
            .filter_map(move |&c| tree.node_ref(c))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node.parent.and_then(|p| self.tree.node_ref(p))
    }

    /// Position among the parent's children; None for roots.
    pub fn position(&self) -> Option<usize> {
        let parent = self.tree.get_node(self.node.parent?)?;
        parent.children.iter().position(|&c| c == self.idx)
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        std::iter::successors(self.parent(), |n| n.parent())
    }

    pub fn to_node(&self) -> Node {
        self.tree.snapshot(self.idx).unwrap_or_default()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.node.id)
            .field("data", &self.node.data)
            .field("children", &self.node.children.len())
            .finish()
    }
}

/// Pre-order, left-to-right iterator over every root and its descendants.
pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        // Push roots in reverse order for left-to-right traversal
        let stack = arena.roots().iter().rev().copied().collect();
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.node_ref(current_idx) {
                for &child in node.node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some(node);
            }
        }
        None
    }
}
