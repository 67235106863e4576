//! Promo API /v1: REST endpoints over the poster generation pipeline
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use metrics::Metrics;
use promo_llm::{FallbackTextClient, PollinationsClient};
use promo_pipeline::PosterGenerator;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub generator: PosterGenerator,
    pub metrics: Metrics,
}

impl AppState {
    /// Production wiring: standard text fallback chain plus the image endpoint
    pub fn standard() -> Self {
        Self {
            generator: PosterGenerator::new(
                Arc::new(FallbackTextClient::standard()),
                Arc::new(PollinationsClient::new()),
            ),
            metrics: Metrics::new(),
        }
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/generate", post(handlers::generate))
        .route("/v1/regenerate", post(handlers::regenerate))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let state = Arc::new(AppState::standard());
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Promo API listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
