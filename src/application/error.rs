//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::application::format::OutputFormat;
use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid topology file {}", .path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    #[error("cannot write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode topology as {format}: {message}")]
    Encoding {
        format: OutputFormat,
        message: String,
    },

    #[error("cannot decode topology from {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            ApplicationError::OperationFailed { source, .. } => source
                .downcast_ref::<std::io::Error>()
                .map(std::io::Error::kind),
            ApplicationError::WriteOutput { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
