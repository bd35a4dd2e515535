//! Conversation storage API handlers

use axum::{extract::State, Json};
use rai_common::{LimitQuery, QueryParams, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::ConversationsState;
use crate::domain::entities::{ChatMessage, Conversation, DEFAULT_TITLE, MAX_TITLE_LENGTH};
use crate::repository::ConversationRecord;

/// Request for creating a conversation
#[derive(Debug, Deserialize, Validate)]
pub struct CreateConversationRequest {
    #[serde(default = "default_title")]
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Response for a created conversation
#[derive(Debug, Serialize)]
pub struct CreateConversationResponse {
    pub id: String,
}

/// Store a conversation as given
pub async fn create_conversation(
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<CreateConversationRequest>,
) -> Result<Json<CreateConversationResponse>> {
    let conversation = Conversation::new(req.title, req.messages);
    let id = state.service.create_conversation(&conversation).await?;
    Ok(Json(CreateConversationResponse { id }))
}

/// List recently stored conversations, newest first
///
/// `?limit=N` defaults to 20 and is clamped to 1..=100, so `limit=0` returns
/// one record and `limit=150` at most 100.
pub async fn list_conversations(
    State(state): State<ConversationsState>,
    QueryParams(query): QueryParams<LimitQuery>,
) -> Result<Json<Vec<ConversationRecord>>> {
    let records = state.service.list_conversations(query.limit()).await?;
    Ok(Json(records))
}
