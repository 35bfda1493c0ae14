//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ForestError, NodeId};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] ForestError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid record file {}: {message}", .path.display())]
    InvalidRecords { path: PathBuf, message: String },

    #[error("no node with id {0} in the forest")]
    UnknownId(NodeId),

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
