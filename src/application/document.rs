//! Taxonomy documents: JSON input for the engine
//!
//! Three shapes are accepted:
//! - `{"roots": [ {node}, ... ]}`, the serialized [`Tree`]
//! - `[ {node}, ... ]`, a bare list of root nodes
//! - `{node}`, a single root node

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Node, Taxonomy, Tree};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaxonomyDocument {
    Roots(Vec<Node>),
    Tree(RootsDocument),
    Single(Box<Node>),
}

/// `{"roots": [...]}` and nothing else, so typos do not pass as an empty tree.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootsDocument {
    pub roots: Vec<Node>,
}

impl TaxonomyDocument {
    pub fn into_tree(self) -> Tree {
        match self {
            Self::Roots(roots) => Tree { roots },
            Self::Tree(document) => Tree {
                roots: document.roots,
            },
            Self::Single(node) => Tree { roots: vec![*node] },
        }
    }
}

/// Parse document `content` into a taxonomy. `path` is only used for errors.
pub fn parse_document(content: &str, path: &Path) -> ApplicationResult<Taxonomy> {
    let document: TaxonomyDocument =
        serde_json::from_str(content).map_err(|e| ApplicationError::InvalidDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut taxonomy = Taxonomy::new();
    taxonomy.set_tree(document.into_tree())?;
    Ok(taxonomy)
}

/// Load a taxonomy from a JSON document on disk.
#[instrument(level = "debug")]
pub fn load_taxonomy(path: &Path) -> ApplicationResult<Taxonomy> {
    let content = fs::read_to_string(path).with_path_context("read taxonomy document", path)?;
    let taxonomy = parse_document(&content, path)?;
    debug!(nodes = taxonomy.len(), "taxonomy loaded");
    Ok(taxonomy)
}
