//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) | ApplicationError::InvalidDocument { .. } => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::NodeNotFound(_) => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { source, .. } => {
                    if source.is::<std::io::Error>() {
                        crate::exitcode::IOERR
                    } else {
                        crate::exitcode::SOFTWARE
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_domain_error_when_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::from(DomainError::RequireField {
            context: "node",
        }));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_io_failure_when_exit_code_then_ioerr() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "read".to_string(),
            source: Box::new(std::io::Error::from(std::io::ErrorKind::NotFound)),
        });
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn given_missing_node_when_exit_code_then_noinput() {
        let err = CliError::from(ApplicationError::NodeNotFound("x".to_string()));
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }
}
