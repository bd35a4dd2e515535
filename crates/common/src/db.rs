//! Shared storage types
//!
//! Every document store backend reports failures through [`StoreError`] so the
//! domain layer can treat them uniformly.

use thiserror::Error;

/// Document store error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document store is not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    #[error("Document store configuration error: {0}")]
    Configuration(String),
}
