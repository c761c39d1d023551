use serde_json::Value;
use tracing::{instrument, trace};

use crate::domain::arena::NodeRef;
use crate::domain::taxonomy::Taxonomy;

/// A non-root node together with its parent and its index among the siblings.
#[derive(Debug, Clone, Copy)]
pub struct ParentChild<'a> {
    pub parent: NodeRef<'a>,
    pub child: NodeRef<'a>,
    pub position: usize,
}

impl Taxonomy {
    /// Depth-first search across all roots for the node with `id`.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, id: &str) -> Option<NodeRef<'_>> {
        self.tree.iter().find(|n| n.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Locates the parent of the node with `child_id`.
    ///
    /// Roots have no parent and yield `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn find_parent_child(&self, child_id: &str) -> Option<ParentChild<'_>> {
        self.tree
            .iter()
            .filter(|n| n.id() == child_id)
            .find_map(|child| {
                Some(ParentChild {
                    parent: child.parent()?,
                    position: child.position()?,
                    child,
                })
            })
    }

    /// Resolves a slug path such as `/news/local/` to a node id.
    ///
    /// Each segment is matched against the slugs of one level, starting at the
    /// roots; at every level the first sibling with a matching slug is followed.
    /// A leading and a trailing slash are optional.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_path(&self, path: &str) -> Option<&str> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.is_empty() {
            return None;
        }
        let segments: Vec<&str> = path.split('/').collect();

        self.get_roots()
            .into_iter()
            .find_map(|root| resolve_segments(root, &segments))
    }
}

fn resolve_segments<'a>(root: NodeRef<'a>, segments: &[&str]) -> Option<&'a str> {
    let (first, rest) = segments.split_first()?;
    if !slug_matches(root, first) {
        return None;
    }

    let mut current = root;
    for segment in rest {
        current = current.children().find(|c| slug_matches(*c, segment))?;
        trace!(id = current.id(), segment, "path segment matched");
    }
    Some(current.id())
}

fn slug_matches(node: NodeRef<'_>, segment: &str) -> bool {
    match node.slug() {
        Some(Value::String(slug)) => slug == segment,
        Some(Value::Number(n)) => n.to_string() == segment,
        Some(Value::Bool(b)) => b.to_string() == segment,
        _ => false,
    }
}
