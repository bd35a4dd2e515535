//! PostgreSQL document store
//!
//! Documents live in a single `documents` table as JSONB bodies keyed by
//! collection. Filters use JSONB containment (`@>`). The schema is applied
//! before the first query and retried on every call until it succeeds, so a
//! database that comes up after the service still gets its table.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{stamp_timestamps, Document, DocumentStore, StoreError, ID_FIELD};

/// Connection pool size
const MAX_CONNECTIONS: u32 = 5;

/// How long a query waits for a pooled connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL-backed document store
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
    schema: Arc<OnceCell<()>>,
}

impl PostgresDocumentStore {
    /// Build a store over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema: Arc::new(OnceCell::new()),
        }
    }

    /// Build a store whose pool connects on first use.
    ///
    /// Only URL parsing can fail here; connection errors surface per call.
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(database_url)?;

        Ok(Self::new(pool))
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }

    /// Apply migrations unless a previous call already succeeded
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.schema.get_or_try_init(|| self.migrate()).await?;
        Ok(())
    }

    /// Whether migrations have been applied by this store
    pub fn is_schema_ready(&self) -> bool {
        self.schema.initialized()
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, StoreError> {
        self.ensure_schema().await?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        stamp_timestamps(&mut record, now);

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Json(record))
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(id.to_string())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        self.ensure_schema().await?;

        let rows = sqlx::query_as::<_, (Uuid, Json<Document>)>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq DESC
            LIMIT $3
            "#,
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        let docs = rows
            .into_iter()
            .map(|(id, Json(mut body))| {
                body.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                body
            })
            .collect();

        Ok(docs)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        self.ensure_schema().await?;

        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
