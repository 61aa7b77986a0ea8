//! CLI-level errors (wraps application errors)

use std::io::ErrorKind;

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::InvalidInput { .. } | ApplicationError::Decode { .. } => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Encoding { .. } => crate::exitcode::SOFTWARE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::WriteOutput { .. } => crate::exitcode::CANTCREAT,
                ApplicationError::OperationFailed { .. } => match e.io_kind() {
                    Some(ErrorKind::NotFound) => crate::exitcode::NOINPUT,
                    Some(ErrorKind::PermissionDenied) => crate::exitcode::NOPERM,
                    Some(ErrorKind::InvalidData) => crate::exitcode::DATAERR,
                    _ => crate::exitcode::IOERR,
                },
            },
        }
    }
}
