//! Conversation repository
//!
//! Adapts conversations to and from raw documents in the `conversation`
//! collection. Raw documents carry the store identifier under `_id`; the
//! records handed to callers expose it as `id` instead.

use std::sync::Arc;

use rai_common::Result;
use rai_docstore::{to_document, Document, DocumentStore, ID_FIELD};
use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::Conversation;

/// Collection holding conversation documents
pub const COLLECTION: &str = "conversation";

/// Conversation as returned to API callers: stored fields plus a public `id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationRecord {
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Document,
}

/// Convert a raw store document into a public record
pub fn to_public_record(mut raw: Document) -> ConversationRecord {
    let id = match raw.remove(ID_FIELD) {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };
    raw.remove("id");

    ConversationRecord { id, fields: raw }
}

#[derive(Clone)]
pub struct ConversationRepository {
    store: Arc<dyn DocumentStore>,
}

impl ConversationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a conversation and return the store-assigned id
    pub async fn create(&self, conversation: &Conversation) -> Result<String> {
        let document = to_document(conversation)?;
        let id = self.store.create_document(COLLECTION, document).await?;
        Ok(id)
    }

    /// List up to `limit` conversations, newest first
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<ConversationRecord>> {
        let docs = self
            .store
            .get_documents(COLLECTION, &Document::new(), limit)
            .await?;

        Ok(docs.into_iter().map(to_public_record).collect())
    }
}
