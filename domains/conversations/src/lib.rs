//! Conversations domain: chat moderation, conversation storage and listing

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ChatMessage, Conversation, MessageRole, DEFAULT_TITLE};
pub use domain::moderation::{moderate, Verdict, DENYLIST, REFUSAL_REPLY};

// Re-export repository types
pub use repository::{ConversationRecord, ConversationRepository, COLLECTION};

// Re-export service types
pub use service::{ChatOutcome, ChatSubmission, ConversationService, EPHEMERAL_CONVERSATION_ID};

// Re-export API types
pub use api::routes;
pub use api::ConversationsState;
