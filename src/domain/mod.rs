//! Domain layer: the taxonomy engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod lookup;
pub mod mutate;
pub mod node;
pub mod path;
pub mod render;
pub mod taxonomy;
pub mod walk;

pub use arena::{NodeRef, TreeArena, TreeNode};
pub use error::{DomainError, DomainResult};
pub use lookup::ParentChild;
pub use node::{create_node, normalize, slugify, Attributes, Node, Tree, ID_ATTRIBUTE, SLUG_ATTRIBUTE};
pub use path::PATH_SEPARATOR;
pub use render::RenderOptions;
pub use taxonomy::Taxonomy;
pub use walk::Visitor;
