//! Chat endpoint integration tests

use axum::http::StatusCode;
use serde_json::json;

use rai_conversations::REFUSAL_REPLY;

use crate::common::TestApp;

#[tokio::test]
async fn test_chat_echoes_message() {
    let app = TestApp::new();
    let (status, body) = app
        .post_json("/api/chat", json!({"message": "  hello world  "}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["reply"],
        "You said: hello world. This is a demo assistant."
    );
    assert_ne!(body["conversation_id"], "ephemeral");
}

#[tokio::test]
async fn test_chat_persists_exchange() {
    let app = TestApp::new();
    let (_, chat) = app
        .post_json(
            "/api/chat",
            json!({
                "message": "Plan a picnic",
                "model": "demo-model",
                "tone": "cheerful",
                "language": "en"
            }),
        )
        .await;

    let (_, list) = app.get_json("/api/conversations").await;
    let record = &list[0];
    assert_eq!(record["id"], chat["conversation_id"]);
    assert_eq!(record["title"], "Plan a picnic");

    let messages = record["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "Plan a picnic");
    assert_eq!(messages[0]["model"], "demo-model");
    assert_eq!(messages[0]["tone"], "cheerful");
    assert_eq!(messages[0]["language"], "en");
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["content"], chat["reply"]);
}

#[tokio::test]
async fn test_chat_blocks_denylisted_terms() {
    let app = TestApp::new();

    for message in ["Something ILLEGAL", "graphic Violence", "self-harm tips"] {
        let (status, body) = app.post_json("/api/chat", json!({ "message": message })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], REFUSAL_REPLY);
    }
}

#[tokio::test]
async fn test_chat_paraphrase_not_blocked() {
    let app = TestApp::new();
    let (_, body) = app
        .post_json("/api/chat", json!({"message": "I feel like hurting myself"}))
        .await;

    assert_eq!(
        body["reply"],
        "You said: I feel like hurting myself. This is a demo assistant."
    );
}

#[tokio::test]
async fn test_chat_empty_message_returns_400() {
    let app = TestApp::new();

    for message in ["", "   "] {
        let (status, body) = app.post_json("/api/chat", json!({ "message": message })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Message cannot be empty"));
    }
    assert_eq!(app.memory_store().count("conversation"), 0);
}

#[tokio::test]
async fn test_chat_oversized_message_returns_400() {
    let app = TestApp::new();
    let message = "a".repeat(10001);
    let (status, body) = app.post_json("/api/chat", json!({ "message": message })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(app.memory_store().count("conversation"), 0);
}

#[tokio::test]
async fn test_chat_message_at_limit_accepted() {
    let app = TestApp::new();
    let message = "a".repeat(10000);
    let (status, body) = app.post_json("/api/chat", json!({ "message": message })).await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["conversation_id"], "ephemeral");
}

#[tokio::test]
async fn test_chat_missing_message_returns_400() {
    let app = TestApp::new();
    let (status, _) = app.post_json("/api/chat", json!({"model": "x"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_ignores_conversation_id() {
    let app = TestApp::new();
    let (_, first) = app.post_json("/api/chat", json!({"message": "one"})).await;
    let (_, second) = app
        .post_json(
            "/api/chat",
            json!({"message": "two", "conversation_id": first["conversation_id"]}),
        )
        .await;

    assert_ne!(first["conversation_id"], second["conversation_id"]);
    assert_eq!(app.memory_store().count("conversation"), 2);
}

#[tokio::test]
async fn test_chat_store_failure_is_ephemeral() {
    let app = TestApp::new();
    app.memory_store().set_failing(true);

    let (status, body) = app.post_json("/api/chat", json!({"message": "hello"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "reply": "You said: hello. This is a demo assistant.",
            "conversation_id": "ephemeral"
        })
    );
}

#[tokio::test]
async fn test_chat_without_store_is_ephemeral() {
    let app = TestApp::unconfigured();
    let (status, body) = app.post_json("/api/chat", json!({"message": "hello"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["conversation_id"], "ephemeral");
}
