use std::io;

use thiserror::Error;

/// Library-wide error type for gh-dispatch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Workflow definitions directory does not exist.
    #[error("directory {0} not found")]
    WorkflowDirNotFound(String),

    /// A required dispatch field is missing or a user-supplied value is malformed.
    #[error("{0}")]
    Validation(String),

    /// The transport failed before a response was received.
    #[error("failed to dispatch request: {0}")]
    DispatchTransport(String),

    /// The dispatch endpoint answered outside the 2xx range.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// Branch listing failed.
    #[error("failed to fetch branches: {0}")]
    BranchFetch(String),

    /// HTTP transport failure reported by the client adapter.
    #[error("{0}")]
    Http(String),

    /// Dispatch payload could not be encoded.
    #[error("failed to marshal payload: {0}")]
    PayloadEncoding(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file contains an invalid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Repository owner/name could not be resolved.
    #[error(
        "Could not determine current repository. Are you in a git-managed directory with a remote?"
    )]
    RepositoryDetectionFailed,

    /// Requested workflow is not in the catalog.
    #[error("Workflow '{name}' not found. Available: {available}")]
    WorkflowNotFound { name: String, available: String },

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::WorkflowDirNotFound(_)
            | AppError::RepositoryDetectionFailed
            | AppError::WorkflowNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Validation(_)
            | AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::PayloadEncoding(_) => io::ErrorKind::InvalidInput,
            AppError::DispatchTransport(_) | AppError::Http(_) | AppError::BranchFetch(_) => {
                io::ErrorKind::ConnectionAborted
            }
            AppError::UnexpectedStatus(_) => io::ErrorKind::InvalidData,
            AppError::GitError { .. } | AppError::ExternalToolError { .. } => io::ErrorKind::Other,
        }
    }
}
