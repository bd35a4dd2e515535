//! Domain entities for the Conversations domain
//!
//! A conversation is a title plus an ordered list of chat messages. Both are
//! immutable once built; the store assigns the identifier on insert.

use serde::{Deserialize, Serialize};

/// Maximum number of characters taken from the user's message for a title
pub const TITLE_MAX_CHARS: usize = 40;

/// Title used when no text is available to derive one
pub const DEFAULT_TITLE: &str = "New Chat";

/// Maximum chat message length in characters
pub const MAX_MESSAGE_LENGTH: u64 = 10000;

/// Maximum length of a client-supplied conversation title
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message within a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub model: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

impl ChatMessage {
    /// Create a user message carrying the requested generation settings
    pub fn user(
        content: String,
        model: Option<String>,
        tone: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            role: MessageRole::User,
            content,
            model,
            tone,
            language,
        }
    }

    /// Create an assistant reply
    pub fn assistant(content: String) -> Self {
        Self {
            role: MessageRole::Assistant,
            content,
            model: None,
            tone: None,
            language: None,
        }
    }
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Create a conversation from a title and messages
    pub fn new(title: String, messages: Vec<ChatMessage>) -> Self {
        Self { title, messages }
    }

    /// Build the conversation recorded for one chat exchange
    pub fn from_exchange(user: ChatMessage, reply: ChatMessage) -> Self {
        Self {
            title: Self::title_for(&user.content),
            messages: vec![user, reply],
        }
    }

    /// Derive a title from message text: its first 40 characters, or
    /// [`DEFAULT_TITLE`] when that is empty
    pub fn title_for(text: &str) -> String {
        let title: String = text.chars().take(TITLE_MAX_CHARS).collect();
        if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        }
    }
}
