use std::collections::HashSet;

use generational_arena::Index;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{normalize, Node};
use crate::domain::taxonomy::Taxonomy;

impl Taxonomy {
    /// Adds `child` under `parent` (or as a new root) and returns a snapshot of
    /// the node actually inserted.
    ///
    /// If the child's identity is already taken anywhere in the tree, a copy under
    /// a fresh id is inserted instead; the same holds for each of its descendants.
    /// `position` splices the child before the existing sibling at that index; an
    /// out-of-range position skips the insert (the normalized node is still
    /// returned). Positions are ignored for roots.
    ///
    /// Returns `Ok(None)` if `parent` is not part of this tree.
    #[instrument(level = "debug", skip(self, child, parent), fields(child = %child.id))]
    pub fn add_node(
        &mut self,
        child: Node,
        parent: Option<&Node>,
        position: Option<usize>,
    ) -> DomainResult<Option<Node>> {
        let parent_idx = match parent {
            None => None,
            Some(p) => match p.effective_id().and_then(|id| self.find(&id)) {
                Some(found) => Some(found.index()),
                None => {
                    debug!(parent = %p.id, "parent is not part of the tree");
                    return Ok(None);
                }
            },
        };
        self.attach(child, parent_idx, position).map(Some)
    }

    /// Adds `node` under the node with `parent_id`.
    ///
    /// Returns `Ok(None)` if no such parent exists.
    #[instrument(level = "debug", skip(self, node), fields(node = %node.id))]
    pub fn insert(
        &mut self,
        node: Node,
        parent_id: &str,
        position: Option<usize>,
    ) -> DomainResult<Option<Node>> {
        let Some(parent_idx) = self.find(parent_id).map(|p| p.index()) else {
            debug!("insert target not found");
            return Ok(None);
        };
        self.attach(node, Some(parent_idx), position).map(Some)
    }

    /// Removes the node with `child_id` together with its subtree.
    ///
    /// Returns whether anything was removed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, child_id: &str) -> bool {
        self.detach(child_id).is_some()
    }

    /// Relocates `node` under `parent_id`.
    ///
    /// NOT atomic: the node is removed first (its current subtree is what gets
    /// re-added), then attached. If `parent_id` cannot be resolved after the
    /// removal, for instance because it lived inside the moved subtree, the node
    /// stays detached and `Ok(None)` is returned. Callers needing atomicity must
    /// check the target beforehand.
    #[instrument(level = "debug", skip(self, node), fields(node = %node.id))]
    pub fn move_node(
        &mut self,
        node: Node,
        parent_id: &str,
        position: Option<usize>,
    ) -> DomainResult<Option<Node>> {
        let id = node.effective_id().unwrap_or_default();
        let subtree = self.detach(&id).unwrap_or(node);

        let Some(parent_idx) = self.find(parent_id).map(|p| p.index()) else {
            warn!(node = %id, parent = %parent_id, "move target not found, node left detached");
            return Ok(None);
        };
        self.attach(subtree, Some(parent_idx), position).map(Some)
    }

    /// Replaces the `data` of the node with `id` in place.
    ///
    /// Null data is refused (`None`): every stored node keeps a payload.
    #[instrument(level = "debug", skip(self, data))]
    pub fn update(&mut self, id: &str, data: impl Into<Value>) -> Option<Node> {
        let data = data.into();
        if data.is_null() {
            warn!(id, "update with null data refused");
            return None;
        }
        let idx = self.find(id)?.index();
        if let Some(node) = self.tree.get_node_mut(idx) {
            node.data = data;
        }
        self.tree.snapshot(idx)
    }

    /// Returns `replacement` if a node with `id` exists.
    ///
    /// The stored node is NOT modified; only the return value reflects the
    /// replacement. Use [`Taxonomy::update`] or remove + insert to change the tree.
    #[instrument(level = "debug", skip(self, replacement))]
    pub fn update_node(&self, id: &str, replacement: Node) -> Option<Node> {
        self.find(id)?;
        warn!(id, "update_node leaves the stored node unchanged");
        Some(replacement)
    }

    fn attach(
        &mut self,
        child: Node,
        parent: Option<Index>,
        position: Option<usize>,
    ) -> DomainResult<Node> {
        let node = self.prepare(child, &mut HashSet::new())?;

        if let (Some(parent_idx), Some(pos)) = (parent, position) {
            let len = self.tree.child_count(parent_idx);
            if pos >= len {
                warn!(id = %node.id, position = pos, children = len, "position out of range, insert skipped");
                return Ok(node);
            }
        }

        self.tree.attach(node.clone(), parent, position);
        debug!(id = %node.id, "node attached");
        Ok(node)
    }

    fn detach(&mut self, id: &str) -> Option<Node> {
        let idx = self.find(id)?.index();
        let node = self.tree.detach(idx)?;
        debug!(id, "node detached");
        Some(node)
    }

    /// Normalizes a subtree for insertion, re-identifying every node whose
    /// identity is already in the tree or earlier in the same subtree.
    fn prepare(&self, mut node: Node, seen: &mut HashSet<String>) -> DomainResult<Node> {
        if let Some(id) = node.effective_id() {
            if seen.contains(&id) || self.contains(&id) {
                debug!(%id, "identity taken, inserting a copy");
                node = node.reidentified();
            }
        }
        normalize(&mut node);

        if node.data.as_ref().map_or(true, Value::is_null) {
            return Err(DomainError::RequireField {
                context: "add_node child",
            });
        }
        seen.insert(node.id.clone());

        node.children = std::mem::take(&mut node.children)
            .into_iter()
            .map(|child| self.prepare(child, seen))
            .collect::<DomainResult<Vec<_>>>()?;
        node.is_leaf = node.children.is_empty();
        Ok(node)
    }
}
