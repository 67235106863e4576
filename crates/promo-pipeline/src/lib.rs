//! Promo Pipeline: the generation orchestrator.
//!
//! `PosterGenerator` wires the interpreter, the caption composer, the
//! deterministic rasterizer, and the image gateway into one flow:
//!
//! 1. interpret raw input into a structured offer plus enhanced copy
//! 2. compose per-platform captions
//! 3. render the embedded backup poster (always succeeds)
//! 4. request a remote provider poster; failure degrades to the backup
//! 5. assemble an immutable artifact with id, content hash, and timestamp
//!
//! The only fallible step visible to callers is input validation; everything
//! past that degrades instead of failing. A regeneration produces a wholly
//! new artifact and never mutates an old one.

use chrono::Utc;
use promo_core::{
    EnhancedCopy, ImageRef, Language, PosterArtifact, PromoError, StructuredOffer, StyleId,
};
use promo_in::InputInterpreter;
use promo_llm::{ImageProvider, TextProvider};
use promo_out::{poster, CaptionComposer};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub struct PosterGenerator {
    interpreter: InputInterpreter,
    composer: CaptionComposer,
    image_provider: Arc<dyn ImageProvider>,
}

impl PosterGenerator {
    pub fn new(text_provider: Arc<dyn TextProvider>, image_provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            interpreter: InputInterpreter::new(text_provider.clone()),
            composer: CaptionComposer::new(text_provider),
            image_provider,
        }
    }

    /// Run the full pipeline from raw user text to a poster artifact.
    ///
    /// Fails only on empty input; provider trouble downstream degrades to
    /// templated content and the embedded backup poster.
    pub async fn generate(
        &self,
        raw_input: &str,
        language: Language,
        style: StyleId,
    ) -> Result<PosterArtifact, PromoError> {
        let raw_input = raw_input.trim();
        if raw_input.is_empty() {
            return Err(PromoError::InvalidInput("input text is empty".into()));
        }

        let (offer, enhanced) = self.interpreter.interpret(raw_input, language).await;
        info!(product = %offer.product, business_type = %offer.business_type, "input interpreted");

        Ok(self.assemble(&offer, &enhanced, language, style).await)
    }

    /// Re-run caption composition and rendering for an already interpreted
    /// offer, typically with a different style. The result is a new,
    /// independent artifact.
    pub async fn regenerate(
        &self,
        offer: &StructuredOffer,
        enhanced: &EnhancedCopy,
        language: Language,
        style: StyleId,
    ) -> PosterArtifact {
        self.assemble(offer, enhanced, language, style).await
    }

    async fn assemble(
        &self,
        offer: &StructuredOffer,
        enhanced: &EnhancedCopy,
        language: Language,
        style: StyleId,
    ) -> PosterArtifact {
        let captions = self.composer.compose(offer, style, language).await;

        let backup_png = poster::render_png(offer, enhanced, style);
        let artifact_hash = blake3::hash(&backup_png).to_hex().to_string();
        let backup_image = ImageRef::embedded(poster::encode_data_uri(&backup_png));

        let primary_image = match self.image_provider.request_poster(offer, enhanced, style).await {
            Ok(image) => image,
            Err(err) => {
                warn!(error = %err, "image provider failed, serving backup poster");
                backup_image.clone()
            }
        };

        PosterArtifact {
            id: Uuid::new_v4(),
            primary_image,
            backup_image,
            captions,
            style,
            language,
            artifact_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use promo_llm::ProviderError;

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

    struct RecordingText {
        prompts: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextProvider for RecordingText {
        fn name(&self) -> &'static str {
            "recording"
        }
        async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Err(ProviderError::Unavailable("record only".into()))
        }
    }

    struct RemoteImage;

    #[async_trait]
    impl ImageProvider for RemoteImage {
        fn name(&self) -> &'static str {
            "remote-image"
        }
        async fn request_poster(
            &self,
            _offer: &StructuredOffer,
            _enhanced: &EnhancedCopy,
            _style: StyleId,
        ) -> Result<ImageRef, ProviderError> {
            Ok(ImageRef::remote("https://img.example/poster.png"))
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

    fn generator(image: Arc<dyn ImageProvider>) -> PosterGenerator {
        PosterGenerator::new(Arc::new(DownText), image)
    }

    #[tokio::test]
    async fn test_generate_with_remote_image() {
        let artifact = generator(Arc::new(RemoteImage))
            .generate("Mango juice 40 rupees buy 2 get 1", Language::En, StyleId::Festive)
            .await
            .unwrap();

        assert_eq!(artifact.primary_image, ImageRef::remote("https://img.example/poster.png"));
        assert!(artifact.backup_image.is_embedded());
        assert!(!artifact.captions.whatsapp.is_empty());
        assert_eq!(artifact.artifact_hash.len(), 64);
        assert_eq!(artifact.style, StyleId::Festive);
        assert_eq!(artifact.language, Language::En);
    }

    #[tokio::test]
    async fn test_image_failure_degrades_to_backup() {
        let artifact = generator(Arc::new(DownImage))
            .generate("fresh flowers ₹99", Language::En, StyleId::Friendly)
            .await
            .unwrap();

        assert_eq!(artifact.primary_image, artifact.backup_image);
        assert!(artifact.primary_image.is_embedded());
    }

    #[tokio::test]
    async fn test_backup_poster_has_canvas_dimensions() {
        let artifact = generator(Arc::new(DownImage))
            .generate("hot samosa", Language::Hi, StyleId::LocalStyle)
            .await
            .unwrap();

        assert_eq!(poster::embedded_dimensions(&artifact.backup_image), Some((540, 960)));
    }

    #[tokio::test]
    async fn test_chosen_style_reaches_caption_prompt() {
        let recorder = Arc::new(RecordingText {
            prompts: std::sync::Mutex::new(Vec::new()),
        });
        let gen = PosterGenerator::new(recorder.clone(), Arc::new(DownImage));
        gen.generate("mango juice ₹40", Language::En, StyleId::Festive)
            .await
            .unwrap();

        let prompts = recorder.prompts.lock().unwrap();
        let caption_prompt = prompts
            .iter()
            .find(|p| p.contains("WHATSAPP:"))
            .expect("caption prompt was sent");
        assert!(caption_prompt.contains("- Style: festive"));
        assert!(caption_prompt.contains(StyleId::Festive.description()));
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let result = generator(Arc::new(RemoteImage))
            .generate("   ", Language::En, StyleId::Friendly)
            .await;
        assert!(matches!(result, Err(PromoError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_regeneration_produces_independent_artifact() {
        let gen = generator(Arc::new(DownImage));
        let offer = StructuredOffer {
            product: "Fresh Mango Juice".into(),
            price: "₹40".into(),
            offer: "Buy 2 Get 1 Free".into(),
            business_type: "Juice Shop".into(),
        };
        let enhanced = EnhancedCopy {
            headline: "Sip The Summer!".into(),
            tagline: "Pure mango in every drop".into(),
            offer_highlight: "Today only!".into(),
            detailed_features: vec!["Fresh fruit daily".into()],
            full_description: "Five sentences here.".into(),
            call_to_action: "Visit us now!".into(),
        };

        let first = gen.regenerate(&offer, &enhanced, Language::En, StyleId::Friendly).await;
        let second = gen.regenerate(&offer, &enhanced, Language::En, StyleId::Friendly).await;
        let restyled = gen.regenerate(&offer, &enhanced, Language::En, StyleId::OfferFocused).await;

        // fresh identity every time, same deterministic backup content
        assert_ne!(first.id, second.id);
        assert_eq!(first.artifact_hash, second.artifact_hash);
        // a different style draws a different poster
        assert_ne!(first.artifact_hash, restyled.artifact_hash);
    }
}
