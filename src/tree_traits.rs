//! Terminal tree display via termtree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::node::value_label;
use crate::domain::{NodeRef, Taxonomy};

pub trait TreeDisplay {
    fn to_tree_string(&self, show_ids: bool) -> Tree<String>;
}

impl TreeDisplay for NodeRef<'_> {
    fn to_tree_string(&self, show_ids: bool) -> Tree<String> {
        let label = value_label(self.data());
        let root = if show_ids {
            format!("{} ({})", label, self.id())
        } else {
            label
        };

        let leaves: Vec<_> = self
            .children()
            .map(|c| c.to_tree_string(show_ids))
            .collect();

        Tree::new(root).with_leaves(leaves)
    }
}

impl TreeDisplay for Taxonomy {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, show_ids: bool) -> Tree<String> {
        if self.is_empty() {
            return Tree::new("Empty tree".to_string());
        }
        let leaves: Vec<_> = self
            .get_roots()
            .iter()
            .map(|r| r.to_tree_string(show_ids))
            .collect();
        Tree::new("/".to_string()).with_leaves(leaves)
    }
}
