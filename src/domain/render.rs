//! Nested list markup for navigation menus, built on [`Taxonomy::walk`].

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::arena::NodeRef;
use crate::domain::node::{is_truthy, value_label};
use crate::domain::taxonomy::Taxonomy;
use crate::domain::walk::Visitor;

/// Markup options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// List container tag (default: "ul")
    pub outer_tag: String,
    /// Item tag (default: "li")
    pub inner_tag: String,
    /// Prefix for generated links (default: "/#!", hash-bang crawlable urls)
    pub start_path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            outer_tag: "ul".into(),
            inner_tag: "li".into(),
            start_path: "/#!".into(),
        }
    }
}

struct MarkupRenderer<'t> {
    taxonomy: &'t Taxonomy,
    options: &'t RenderOptions,
    out: String,
}

impl Visitor for MarkupRenderer<'_> {
    fn on_level_start(&mut self, level: usize) {
        self.out.push_str(&format!(
            r#"<{} class="level-{}">"#,
            self.options.outer_tag, level
        ));
    }

    fn on_level_end(&mut self, _level: usize) {
        self.out.push_str(&format!("</{}>", self.options.outer_tag));
    }

    fn on_node_start(&mut self, node: NodeRef<'_>) {
        let slug = node
            .slug()
            .filter(|s| is_truthy(s))
            .map(value_label)
            .unwrap_or_default();
        let label = if is_truthy(node.data()) {
            value_label(node.data())
        } else {
            slug.clone()
        };
        let href = format!(
            "{}{}{}",
            self.options.start_path,
            self.taxonomy.path(node.id()),
            slug
        );

        self.out.push_str(&format!(
            r#"<{} class="sid_{}"><a href="{}" title="View all under {}">{}</a>"#,
            self.options.inner_tag,
            escape(node.id()),
            escape(&href),
            escape(&slug),
            escape(&label),
        ));
    }

    fn on_node_end(&mut self, _node: NodeRef<'_>) {
        self.out.push_str(&format!("</{}>", self.options.inner_tag));
    }
}

impl Taxonomy {
    /// Renders the whole tree as nested lists of links.
    ///
    /// Each item links to `start_path + path(id) + slug` and is labeled with the
    /// node's data, or its slug when the data is falsy.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut renderer = MarkupRenderer {
            taxonomy: self,
            options,
            out: String::new(),
        };
        self.walk(&mut renderer, None);
        renderer.out
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
