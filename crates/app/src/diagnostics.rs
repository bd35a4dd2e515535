//! Diagnostics endpoints: greetings, health, and the database check
//!
//! The check never fails; every problem is folded into its text fields.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use rai_docstore::DocumentStore;
use serde::Serialize;

/// Number of collection names reported by the check
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Characters of a store error kept in the check report
const MAX_ERROR_CHARS: usize = 50;

/// State for the diagnostics routes
#[derive(Clone)]
pub struct DiagnosticsState {
    pub store: Arc<dyn DocumentStore>,
    pub database_url_set: bool,
    pub database_name_set: bool,
}

/// Simple message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Database check report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Create diagnostics routes
pub fn routes() -> Router<DiagnosticsState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/hello", get(hello))
        .route("/test", get(test_database))
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the Responsible AI backend!",
    })
}

async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Check whether the document store is configured and answering
async fn test_database(State(state): State<DiagnosticsState>) -> Json<DatabaseReport> {
    Json(check_database(&state).await)
}

/// Build the database check report
pub async fn check_database(state: &DiagnosticsState) -> DatabaseReport {
    let mut report = DatabaseReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(state.database_url_set),
        database_name: set_marker(state.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if !state.store.is_configured() {
        report.database = "⚠️  Available but not initialized".to_string();
        return report;
    }

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();

    match state.store.list_collections().await {
        Ok(mut names) => {
            names.truncate(MAX_REPORTED_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database check failed");
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
            );
        }
    }

    report
}

fn set_marker(set: bool) -> String {
    let marker = if set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
