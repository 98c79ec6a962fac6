use std::io;
use thiserror::Error;

/// Custom error type for sysdash
#[derive(Error, Debug)]
pub enum DashError {
    /// The metrics provider could not answer a query.
    #[error("Metrics provider unavailable ({query})")]
    ProviderUnavailable {
        query: String,
        #[source]
        source: io::Error,
    },

    #[error("No CPU cores were reported by the metrics provider")]
    NoCoresReported,

    #[error("Terminal rendering failed")]
    RenderingFailure(#[source] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for sysdash
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create a provider error for the named query
    pub fn provider<S: Into<String>>(query: S, source: io::Error) -> Self {
        DashError::ProviderUnavailable {
            query: query.into(),
            source,
        }
    }

    /// Create a provider error from a plain message
    pub fn provider_msg<S: Into<String>, M: Into<String>>(query: S, msg: M) -> Self {
        Self::provider(query, io::Error::other(msg.into()))
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DashError::Config(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        DashError::InvalidPath(msg.into())
    }

    /// True for the one soft provider failure: access to a resource was refused.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            DashError::ProviderUnavailable { source, .. }
                if source.kind() == io::ErrorKind::PermissionDenied
        )
    }
}
