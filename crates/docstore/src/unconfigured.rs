//! Null-object document store used when no database is configured

use crate::{Document, DocumentStore, StoreError};

/// Document store that rejects every call with [`StoreError::NotConfigured`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredDocumentStore;

#[async_trait::async_trait]
impl DocumentStore for UnconfiguredDocumentStore {
    async fn create_document(
        &self,
        _collection: &str,
        _record: Document,
    ) -> Result<String, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: &Document,
        _limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
