//! Depth-first visitor over the whole taxonomy.
//!
//! Hooks follow the classic walker shape: a level hook brackets each list of
//! siblings, a node hook brackets each node. Roots are level 1.

use tracing::instrument;

use crate::domain::arena::NodeRef;
use crate::domain::node::is_truthy;
use crate::domain::taxonomy::Taxonomy;

/// Traversal hooks. Every hook defaults to a no-op, so implementors only
/// override what they care about.
pub trait Visitor {
    fn on_level_start(&mut self, _level: usize) {}

    fn on_level_end(&mut self, _level: usize) {}

    fn on_node_start(&mut self, _node: NodeRef<'_>) {}

    fn on_node_end(&mut self, _node: NodeRef<'_>) {}
}

impl Taxonomy {
    /// Walks every root and its descendants, firing `visitor` hooks.
    ///
    /// Roots whose data is falsy get no node hooks but their subtree is still
    /// visited. When a child at `max_depth` has been started the walk of that
    /// sibling list stops outright: no descent, no `on_node_end` for the child,
    /// no `on_level_end` for the level. `None` means unbounded.
    #[instrument(level = "debug", skip(self, visitor))]
    pub fn walk<V: Visitor>(&self, visitor: &mut V, max_depth: Option<usize>) {
        visitor.on_level_start(1);
        for root in self.get_roots() {
            let labeled = is_truthy(root.data());
            if labeled {
                visitor.on_node_start(root);
            }
            visit(root, 2, visitor, max_depth);
            if labeled {
                visitor.on_node_end(root);
            }
        }
        visitor.on_level_end(1);
    }
}

fn visit<V: Visitor>(node: NodeRef<'_>, level: usize, visitor: &mut V, max_depth: Option<usize>) {
    if node.child_count() == 0 {
        return;
    }

    visitor.on_level_start(level);
    for child in node.children() {
        visitor.on_node_start(child);
        if max_depth == Some(level) {
            return;
        }
        visit(child, level + 1, visitor, max_depth);
        visitor.on_node_end(child);
    }
    visitor.on_level_end(level);
}
