//! In-memory document store
//!
//! Keeps documents in insertion order inside the process. Used by tests and
//! local demos; can be flipped into a failing mode to simulate an outage.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::{matches_filter, stamp_timestamps, Document, DocumentStore, StoreError, ID_FIELD};

#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    collection: String,
    body: Document,
}

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<Vec<StoredDocument>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of documents stored in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.lock()
            .map(|docs| docs.iter().filter(|d| d.collection == collection).count())
            .unwrap_or(0)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store is in failing mode".to_string(),
            ));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<StoredDocument>>, StoreError> {
        self.documents
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        mut record: Document,
    ) -> Result<String, StoreError> {
        self.check_available()?;

        let id = Uuid::new_v4().to_string();
        stamp_timestamps(&mut record, Utc::now());

        self.lock()?.push(StoredDocument {
            id: id.clone(),
            collection: collection.to_string(),
            body: record,
        });

        tracing::debug!(collection, id = %id, "Stored document in memory");
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;

        let limit = usize::try_from(limit).unwrap_or(0);
        let docs = self
            .lock()?
            .iter()
            .rev()
            .filter(|d| d.collection == collection && matches_filter(&d.body, filter))
            .take(limit)
            .map(|d| {
                let mut raw = d.body.clone();
                raw.insert(ID_FIELD.to_string(), Value::String(d.id.clone()));
                raw
            })
            .collect();

        Ok(docs)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        self.check_available()?;

        let names: BTreeSet<String> = self
            .lock()?
            .iter()
            .map(|d| d.collection.clone())
            .collect();
        Ok(names.into_iter().collect())
    }
}
