//! Responsible AI backend composition root
//!
//! Composes the domain routers and diagnostics into a single application.

pub mod diagnostics;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use rai_conversations::ConversationsState;
use rai_docstore::{DocumentStore, StoreConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::diagnostics::DiagnosticsState;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub fn create_app(store: Arc<dyn DocumentStore>, store_config: &StoreConfig) -> Router {
    let diagnostics_state = DiagnosticsState {
        store: store.clone(),
        database_url_set: store_config.database_url.is_some(),
        database_name_set: store_config.database_name.is_some(),
    };

    let conversations_state = ConversationsState::new(store);

    Router::new()
        .merge(diagnostics::routes().with_state(diagnostics_state))
        .merge(rai_conversations::routes().with_state(conversations_state))
}

/// Build the CORS layer from a comma-separated origin list.
///
/// A `*` entry anywhere in the list allows any origin and mirrors it back so
/// credentialed requests work.
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let entries: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    if entries.contains(&"*") {
        if entries.len() > 1 {
            tracing::warn!(
                origins,
                "Wildcard CORS origin overrides the other listed origins"
            );
        }
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = entries
        .into_iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Cap request bodies at 1 MiB
pub fn body_limit_layer() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_BODY_BYTES)
}
