//! Promo LLM: provider gateways for text and image generation
//!
//! This crate owns every network boundary of the pipeline:
//! - `TextProvider`: one text prompt in, normalized plain text out.
//! - `FallbackTextClient`: tries providers in a fixed priority order with a
//!   per-call timeout and a single retry, then surfaces `Unavailable`.
//! - `ImageProvider`: synthesizes a visual prompt and returns an unfetched
//!   remote image URL. No local fallback lives here; callers own their own
//!   semantic defaults.
//!
//! Clients are plain constructed objects meant to be dependency-injected;
//! there are no module-level singletons.

pub mod bridge;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod image_prompt;
pub mod pollinations;
pub mod response;

use async_trait::async_trait;
use promo_core::{EnhancedCopy, ImageRef, StructuredOffer, StyleId};

pub use bridge::BridgeClient;
pub use error::ProviderError;
pub use fallback::{FallbackConfig, FallbackTextClient};
pub use gemini::GeminiClient;
pub use pollinations::PollinationsClient;

/// A text-generation backend: one prompt in, raw text out.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Send a prompt and return the provider's text, normalized to a plain
    /// string regardless of the provider's envelope shape.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// An image-generation backend producing a remote poster image reference.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Request a poster image for the offer. Returns an unfetched remote URL;
    /// resolving it (and any CORS-driven re-encoding) is the caller's concern.
    async fn request_poster(
        &self,
        offer: &StructuredOffer,
        enhanced: &EnhancedCopy,
        style: StyleId,
    ) -> Result<ImageRef, ProviderError>;
}
