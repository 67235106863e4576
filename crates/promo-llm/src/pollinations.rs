//! Text-to-image endpoint client returning unfetched poster URLs.
//!
//! The endpoint takes the prompt as a percent-encoded path segment plus fixed
//! width/height query parameters and serves the generated image at that URL.
//! This client never fetches the image and carries no fallback of its own;
//! failures propagate to the orchestrator, which substitutes the deterministic
//! backup render.

use crate::error::ProviderError;
use crate::image_prompt::{build_poster_prompt, sanitize_prompt};
use crate::ImageProvider;
use async_trait::async_trait;
use promo_core::{EnhancedCopy, ImageRef, StructuredOffer, StyleId};
use url::Url;

const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";

/// Poster dimensions requested from the provider (portrait, mobile ratio)
pub const POSTER_WIDTH: u32 = 540;
pub const POSTER_HEIGHT: u32 = 960;

pub struct PollinationsClient {
    base_url: String,
}

impl PollinationsClient {
    pub fn new() -> Self {
        let base_url = std::env::var("PROMO_IMAGE_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn poster_url(&self, prompt: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidEndpoint(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProviderError::InvalidEndpoint("base URL cannot be a base".into()))?;
            segments.push("prompt");
            segments.push(prompt);
        }
        url.query_pairs_mut()
            .append_pair("width", &POSTER_WIDTH.to_string())
            .append_pair("height", &POSTER_HEIGHT.to_string())
            .append_pair("nologo", "true");
        Ok(url)
    }
}

impl Default for PollinationsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for PollinationsClient {
    fn name(&self) -> &'static str {
        "pollinations"
    }

    async fn request_poster(
        &self,
        offer: &StructuredOffer,
        enhanced: &EnhancedCopy,
        style: StyleId,
    ) -> Result<ImageRef, ProviderError> {
        let prompt = sanitize_prompt(&build_poster_prompt(offer, enhanced, style));
        let url = self.poster_url(&prompt)?;
        Ok(ImageRef::remote(url))
    }
}
