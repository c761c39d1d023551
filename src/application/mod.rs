//! Application layer: document loading and use cases
//!
//! This layer feeds taxonomy documents into the domain engine.

pub mod document;
pub mod error;
pub mod error_ext;

pub use document::{load_taxonomy, parse_document, TaxonomyDocument};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
