//! Document store capability
//!
//! Schema-flexible records grouped by collection name, behind the
//! [`DocumentStore`] trait:
//! - PostgreSQL JSONB backend for deployments
//! - In-memory backend for tests and local demos
//! - Unconfigured null-object backend when no database is set up

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

pub mod memory;
pub mod postgres;
pub mod unconfigured;

pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use rai_common::StoreError;
pub use unconfigured::UnconfiguredDocumentStore;

/// A raw document: a JSON object
pub type Document = serde_json::Map<String, Value>;

/// Field carrying the store-assigned identifier on raw documents
pub const ID_FIELD: &str = "_id";

/// Document store trait for different backends
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into a collection and return its generated id
    async fn create_document(&self, collection: &str, record: Document)
        -> Result<String, StoreError>;

    /// Fetch up to `limit` documents matching `filter`, newest first.
    ///
    /// Every returned document carries its identifier under [`ID_FIELD`].
    async fn get_documents(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Names of all collections holding at least one document, sorted
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Whether a real backend sits behind this handle
    fn is_configured(&self) -> bool {
        true
    }
}

/// Serialize a record into a document, rejecting non-object values
pub fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Stamp `created_at` / `updated_at` onto a document about to be inserted
pub fn stamp_timestamps(document: &mut Document, now: DateTime<Utc>) {
    let stamp = Value::String(now.to_rfc3339());
    document.insert("created_at".to_string(), stamp.clone());
    document.insert("updated_at".to_string(), stamp);
}

/// Top-level equality match used by backends without native filtering
pub fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Document store configuration
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Backend provider (postgres, memory, none)
    pub provider: String,
    /// Database connection URL
    pub database_url: Option<String>,
    /// Database name, reported by diagnostics
    pub database_name: Option<String>,
}

impl StoreConfig {
    /// Create store config from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let database_name = std::env::var("DATABASE_NAME").ok().filter(|v| !v.is_empty());

        let provider = std::env::var("STORE_PROVIDER").unwrap_or_else(|_| {
            if database_url.is_some() {
                "postgres".to_string()
            } else {
                "none".to_string()
            }
        });

        Self {
            provider,
            database_url,
            database_name,
        }
    }

    /// In-memory configuration, mostly for tests
    pub fn memory() -> Self {
        Self {
            provider: "memory".to_string(),
            ..Self::default()
        }
    }
}

/// Document store factory
pub struct DocumentStoreFactory;

impl DocumentStoreFactory {
    /// Create a document store based on configuration
    pub async fn create(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
        match config.provider.as_str() {
            "postgres" | "postgresql" => {
                let Some(url) = config.database_url.as_deref() else {
                    tracing::warn!("Postgres provider selected but DATABASE_URL is not set");
                    return Ok(Arc::new(UnconfiguredDocumentStore));
                };

                tracing::info!("Creating Postgres document store");
                let store = PostgresDocumentStore::connect_lazy(url)?;

                // Retried before each query until it succeeds
                if let Err(e) = store.ensure_schema().await {
                    tracing::warn!(error = %e, "Document store schema setup deferred");
                }

                Ok(Arc::new(store))
            }
            "memory" => {
                tracing::info!("Creating in-memory document store");
                Ok(Arc::new(MemoryDocumentStore::new()))
            }
            "none" => {
                tracing::info!("No document store configured");
                Ok(Arc::new(UnconfiguredDocumentStore))
            }
            provider => Err(StoreError::Configuration(format!(
                "Unknown store provider: {}. Supported providers: postgres, memory, none",
                provider
            ))),
        }
    }
}
