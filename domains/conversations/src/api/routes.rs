//! Route definitions for Conversations domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, conversations};
use super::middleware::ConversationsState;

/// Create conversation routes
fn conversation_routes() -> Router<ConversationsState> {
    Router::new().route(
        "/api/conversations",
        get(conversations::list_conversations).post(conversations::create_conversation),
    )
}

/// Create chat routes
fn chat_routes() -> Router<ConversationsState> {
    Router::new().route("/api/chat", post(chat::chat))
}

/// Create all Conversations domain API routes
pub fn routes() -> Router<ConversationsState> {
    Router::new()
        .merge(conversation_routes())
        .merge(chat_routes())
}
