//! Error types for the audit crate.

use thiserror::Error;

/// Errors that can occur during audit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The audit log could not be accessed.
    #[error("storage error: {0}")]
    StorageError(String),

    /// A record could not be serialized for the stdout mirror.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
