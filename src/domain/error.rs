//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent structural violations of the taxonomy.
///
/// Lookups that miss are not errors: they return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A node was created or attached without a `data` payload.
    #[error("{context} requires data property")]
    RequireField { context: &'static str },

    #[error("invalid node field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
