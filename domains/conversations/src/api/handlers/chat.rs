//! Chat API handler

use axum::{extract::State, Json};
use rai_common::{Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::ConversationsState;
use crate::domain::entities::MAX_MESSAGE_LENGTH;
use crate::service::ChatSubmission;

/// Request for sending a chat message
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    /// Accepted but unused; every chat starts a new conversation
    pub conversation_id: Option<String>,

    /// Message text, must be non-empty after trimming
    #[validate(length(max = MAX_MESSAGE_LENGTH))]
    pub message: String,

    pub model: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

/// Chat response DTO
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation_id: String,
}

/// Reply to a chat message and record the exchange
pub async fn chat(
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let outcome = state
        .service
        .submit_chat(ChatSubmission {
            conversation_id: req.conversation_id,
            message: req.message,
            model: req.model,
            tone: req.tone,
            language: req.language,
        })
        .await?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        conversation_id: outcome.conversation_id,
    }))
}
