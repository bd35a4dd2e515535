//! Store adapters for the Conversations domain

pub mod conversations;

pub use conversations::{to_public_record, ConversationRecord, ConversationRepository, COLLECTION};
