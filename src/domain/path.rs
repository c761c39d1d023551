use itertools::Itertools;
use tracing::instrument;

use crate::domain::node::value_label;
use crate::domain::taxonomy::Taxonomy;

pub const PATH_SEPARATOR: &str = "/";

impl Taxonomy {
    /// Human path of the node with `id`: the data labels of its ancestors,
    /// root first, e.g. `/parent/child/`.
    ///
    /// Always starts and ends with `/`. Roots and unknown ids yield `/`.
    #[instrument(level = "debug", skip(self))]
    pub fn path(&self, id: &str) -> String {
        let Some(node) = self.find(id) else {
            return PATH_SEPARATOR.to_string();
        };

        let ancestors: Vec<_> = node.ancestors().collect();
        if ancestors.is_empty() {
            return PATH_SEPARATOR.to_string();
        }

        let labels = ancestors
            .iter()
            .rev()
            .map(|a| value_label(a.data()))
            .join(PATH_SEPARATOR);
        format!("{PATH_SEPARATOR}{labels}{PATH_SEPARATOR}")
    }
}
