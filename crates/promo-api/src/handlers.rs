//! API handlers for the promotion pipeline.

use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use promo_core::{EnhancedCopy, Language, PromoError, StructuredOffer, StyleId, PROMO_VERSION};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub style: StyleId,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    pub offer: StructuredOffer,
    pub enhanced: EnhancedCopy,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub style: StyleId,
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> (StatusCode, Json<Value>) {
    state.metrics.generate_total.inc();

    match state
        .generator
        .generate(&payload.text, payload.language, payload.style)
        .await
    {
        Ok(artifact) => (StatusCode::OK, Json(json!(artifact))),
        Err(err) => {
            state.metrics.generate_rejected.inc();
            let status = match err {
                PromoError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                PromoError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(json!({ "error": err.to_string() })))
        }
    }
}

pub async fn regenerate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegenerateRequest>,
) -> (StatusCode, Json<Value>) {
    state.metrics.regenerate_total.inc();

    let artifact = state
        .generator
        .regenerate(&payload.offer, &payload.enhanced, payload.language, payload.style)
        .await;
    (StatusCode::OK, Json(json!(artifact)))
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": PROMO_VERSION })),
    )
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    match state.metrics.encode() {
        Ok(text) => (StatusCode::OK, text),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use async_trait::async_trait;
    use promo_core::ImageRef;
    use promo_llm::{ImageProvider, ProviderError, TextProvider};
    use promo_pipeline::PosterGenerator;

    struct DownText;

    #[async_trait]
    impl TextProvider for DownText {
        fn name(&self) -> &'static str {
            "down-text"
        }
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Unavailable("simulated outage".into()))
        }
    }

    struct DownImage;

    #[async_trait]
    impl ImageProvider for DownImage {
        fn name(&self) -> &'static str {
            "down-image"
        }
        async fn request_poster(
            &self,
            _offer: &StructuredOffer,
            _enhanced: &EnhancedCopy,
            _style: StyleId,
        ) -> Result<ImageRef, ProviderError> {
            Err(ProviderError::Unavailable("simulated outage".into()))
        }
    }

    fn offline_state() -> Arc<AppState> {
        Arc::new(AppState {
            generator: PosterGenerator::new(Arc::new(DownText), Arc::new(DownImage)),
            metrics: Metrics::new(),
        })
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_text() {
        let state = offline_state();
        let (status, body) = generate(
            State(state.clone()),
            Json(GenerateRequest {
                text: "   ".into(),
                language: Language::default(),
                style: StyleId::default(),
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.0["error"].as_str().unwrap().starts_with("INPUT/"));
        assert_eq!(state.metrics.generate_rejected.get(), 1);
    }

    #[tokio::test]
    async fn test_generate_succeeds_fully_offline() {
        let state = offline_state();
        let (status, body) = generate(
            State(state),
            Json(GenerateRequest {
                text: "Mango juice 40 rupees".into(),
                language: Language::En,
                style: StyleId::Festive,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0["style"], "festive");
        assert_eq!(body.0["backup_image"]["kind"], "embedded");
        // image provider was down, primary degraded to the backup
        assert_eq!(body.0["primary_image"]["kind"], "embedded");
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let (status, body) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.0["version"], PROMO_VERSION);
    }
}
