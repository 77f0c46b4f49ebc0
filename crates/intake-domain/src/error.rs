//! Domain Errors

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures reading or writing the local record log
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Stored records under '{key}' are unreadable: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
