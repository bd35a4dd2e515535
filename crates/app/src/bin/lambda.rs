//! Responsible AI API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use rai_app::{body_limit_layer, build_cors_layer, create_app};
use rai_docstore::{DocumentStoreFactory, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing Responsible AI API Lambda");

    let store_config = StoreConfig::from_env();
    let store = DocumentStoreFactory::create(&store_config)
        .await
        .map_err(|e| Error::from(format!("Document store error: {}", e)))?;

    info!(configured = store.is_configured(), "Document store ready");

    let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let app = create_app(store, &store_config)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&cors_origins))
        .layer(body_limit_layer());

    info!("Responsible AI API Lambda ready to serve requests");

    run(app).await
}
