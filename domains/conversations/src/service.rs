//! Conversation service
//!
//! Chat submission (moderation, conversation assembly, best-effort
//! persistence) plus direct conversation create/list.

use std::sync::Arc;

use rai_common::{Error, Result};
use rai_docstore::DocumentStore;

use crate::domain::entities::{ChatMessage, Conversation};
use crate::domain::moderation;
use crate::repository::{ConversationRecord, ConversationRepository};

/// Conversation id returned when a chat exchange could not be stored
pub const EPHEMERAL_CONVERSATION_ID: &str = "ephemeral";

/// A chat message submitted by a user
#[derive(Debug, Clone, Default)]
pub struct ChatSubmission {
    /// Accepted for compatibility; chats always start a new conversation
    pub conversation_id: Option<String>,
    pub message: String,
    pub model: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

impl ChatSubmission {
    /// Submission with only message text
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Result of a chat submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    pub reply: String,
    pub conversation_id: String,
}

impl ChatOutcome {
    /// Whether the exchange was returned without being stored
    pub fn is_ephemeral(&self) -> bool {
        self.conversation_id == EPHEMERAL_CONVERSATION_ID
    }
}

#[derive(Clone)]
pub struct ConversationService {
    repo: ConversationRepository,
}

impl ConversationService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repo: ConversationRepository::new(store),
        }
    }

    /// Moderate a chat message, reply to it, and record the exchange.
    ///
    /// Storage failures never fail the call: the reply comes back with the
    /// [`EPHEMERAL_CONVERSATION_ID`] instead.
    pub async fn submit_chat(&self, submission: ChatSubmission) -> Result<ChatOutcome> {
        let text = submission.message.trim();
        if text.is_empty() {
            return Err(Error::Validation("Message cannot be empty".to_string()));
        }

        log_ignored_conversation_id(submission.conversation_id.as_deref());

        let reply = moderation::reply_for(text);
        let user = ChatMessage::user(
            text.to_string(),
            submission.model,
            submission.tone,
            submission.language,
        );
        let assistant = ChatMessage::assistant(reply.clone());
        let conversation = Conversation::from_exchange(user, assistant);

        let conversation_id = match self.repo.create(&conversation).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to store chat conversation, replying ephemerally"
                );
                EPHEMERAL_CONVERSATION_ID.to_string()
            }
        };

        Ok(ChatOutcome {
            reply,
            conversation_id,
        })
    }

    /// Persist a conversation as given
    pub async fn create_conversation(&self, conversation: &Conversation) -> Result<String> {
        let id = self.repo.create(conversation).await?;
        tracing::debug!(id = %id, "Conversation created");
        Ok(id)
    }

    /// List up to `limit` stored conversations, newest first
    pub async fn list_conversations(&self, limit: i64) -> Result<Vec<ConversationRecord>> {
        self.repo.list_recent(limit).await
    }
}

#[mutants::skip] // Logging only
fn log_ignored_conversation_id(conversation_id: Option<&str>) {
    if let Some(id) = conversation_id {
        tracing::debug!(
            conversation_id = id,
            "Ignoring conversation_id, starting a new conversation"
        );
    }
}
