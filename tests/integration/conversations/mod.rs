//! Conversation storage integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::TestApp;

mod test_create_conversation {
    use super::*;

    #[tokio::test]
    async fn test_create_conversation_returns_id() {
        let app = TestApp::new();
        let (status, body) = app
            .post_json(
                "/api/conversations",
                json!({
                    "title": "Trip planning",
                    "messages": [
                        {"role": "user", "content": "Where should I go?"},
                        {"role": "assistant", "content": "Somewhere sunny."}
                    ]
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(app.memory_store().count("conversation"), 1);
    }

    #[tokio::test]
    async fn test_create_conversation_stored_as_given() {
        let app = TestApp::new();
        let (_, created) = app
            .post_json(
                "/api/conversations",
                json!({
                    "title": "Unmoderated",
                    "messages": [{"role": "user", "content": "violence", "tone": "calm"}]
                }),
            )
            .await;

        let (_, list) = app.get_json("/api/conversations").await;
        let record = &list[0];
        assert_eq!(record["id"], created["id"]);
        assert_eq!(record["title"], "Unmoderated");
        assert_eq!(record["messages"][0]["content"], "violence");
        assert_eq!(record["messages"][0]["tone"], "calm");
    }

    #[tokio::test]
    async fn test_create_conversation_defaults() {
        let app = TestApp::new();
        let (status, _) = app.post_json("/api/conversations", json!({})).await;
        assert_eq!(status, StatusCode::OK);

        let (_, list) = app.get_json("/api/conversations").await;
        assert_eq!(list[0]["title"], "New Chat");
        assert_eq!(list[0]["messages"], json!([]));
    }

    #[tokio::test]
    async fn test_create_conversation_invalid_role_returns_400() {
        let app = TestApp::new();
        let (status, body) = app
            .post_json(
                "/api/conversations",
                json!({"title": "x", "messages": [{"role": "robot", "content": "hi"}]}),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_conversation_title_too_long_returns_400() {
        let app = TestApp::new();
        let (status, body) = app
            .post_json("/api/conversations", json!({ "title": "t".repeat(201) }))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(app.memory_store().count("conversation"), 0);
    }

    #[tokio::test]
    async fn test_create_conversation_title_at_limit_accepted() {
        let app = TestApp::new();
        let (status, _) = app
            .post_json("/api/conversations", json!({ "title": "t".repeat(200) }))
            .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_conversation_storage_failure_returns_500() {
        let app = TestApp::new();
        app.memory_store().set_failing(true);

        let (status, body) = app
            .post_json("/api/conversations", json!({"title": "x"}))
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("failing mode"));
    }

    #[tokio::test]
    async fn test_create_conversation_without_store_returns_500() {
        let app = TestApp::unconfigured();
        let (status, body) = app
            .post_json("/api/conversations", json!({"title": "x"}))
            .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("not configured"));
    }
}

mod test_list_conversations {
    use super::*;

    async fn seed(app: &TestApp, count: usize) {
        for n in 0..count {
            let (status, _) = app
                .post_json("/api/conversations", json!({ "title": format!("conv {}", n) }))
                .await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_list_empty() {
        let app = TestApp::new();
        let (status, body) = app.get_json("/api/conversations").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_respects_limit_and_maps_ids() {
        let app = TestApp::new();
        seed(&app, 3).await;

        let (status, body) = app.get_json("/api/conversations?limit=2").await;
        assert_eq!(status, StatusCode::OK);

        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 2);
        for record in records {
            assert!(record["id"].is_string());
            assert!(record.get("_id").is_none());
            assert!(record.get("created_at").is_some());
        }
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let app = TestApp::new();
        seed(&app, 3).await;

        let (_, body) = app.get_json("/api/conversations").await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["conv 2", "conv 1", "conv 0"]);
    }

    #[tokio::test]
    async fn test_list_default_limit_is_20() {
        let app = TestApp::new();
        seed(&app, 25).await;

        let (_, body) = app.get_json("/api/conversations").await;
        assert_eq!(body.as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_list_invalid_limit_returns_error_body() {
        let app = TestApp::new();
        let (status, body) = app.get_json("/api/conversations?limit=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_list_limit_clamped() {
        let app = TestApp::new();
        seed(&app, 3).await;

        let (status, body) = app.get_json("/api/conversations?limit=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = app.get_json("/api/conversations?limit=150").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_storage_failure_returns_500() {
        let app = TestApp::new();
        app.memory_store().set_failing(true);

        let (status, body): (_, Value) = app.get_json("/api/conversations").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    }
}
