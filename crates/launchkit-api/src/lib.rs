//! Launchkit API /v1: REST endpoints over the wizard core
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use launchkit_docs::DocumentEngine;
use launchkit_remote::HttpFacade;
use launchkit_tier::MemoryStore;

pub use handlers::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/documents/render", post(handlers::render_document))
        .route("/v1/documents/completion", post(handlers::completion))
        .route("/v1/refine", post(handlers::refine))
        .route("/v1/checkout", post(handlers::checkout))
        .route("/v1/export", post(handlers::export))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str, facade_url: &str) {
    let state = AppState {
        engine: Arc::new(DocumentEngine::new().expect("embedded template pack compiles")),
        facade: Arc::new(HttpFacade::new(facade_url.to_string())),
        store: Arc::new(MemoryStore::new()),
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Launchkit API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
