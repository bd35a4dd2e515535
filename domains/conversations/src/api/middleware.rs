//! Conversations domain state

use std::sync::Arc;

use rai_docstore::DocumentStore;

use crate::ConversationService;

/// Application state for the Conversations domain
#[derive(Clone)]
pub struct ConversationsState {
    pub service: ConversationService,
}

impl ConversationsState {
    /// Build the domain state around a document store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            service: ConversationService::new(store),
        }
    }
}
