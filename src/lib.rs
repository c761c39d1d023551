//! Ordered, labeled taxonomy trees.
//!
//! The [`Taxonomy`] engine owns one tree of nodes and supports insertion,
//! removal, relocation, lookup by id or slug path, path reconstruction,
//! depth-bounded walks and navigation markup rendering.
//!
//! ```
//! use taxonomy::{Node, Taxonomy};
//!
//! let mut taxonomy = Taxonomy::new();
//! let news = taxonomy.add_node(Node::new("News"), None, None)?.unwrap();
//! let local = taxonomy.add_node(Node::new("Local Events"), Some(&news), None)?.unwrap();
//!
//! assert_eq!(taxonomy.path(&local.id), "/News/");
//! assert_eq!(taxonomy.find_by_path("/news/local-events"), Some(local.id.as_str()));
//! # Ok::<(), taxonomy::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    create_node, slugify, DomainError, DomainResult, Node, NodeRef, ParentChild, RenderOptions,
    Taxonomy, Tree, Visitor,
};
