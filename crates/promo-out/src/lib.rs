//! Promo Out: caption composition and deterministic poster rendering.
//!
//! Two halves. `CaptionComposer` asks a text provider for per-platform
//! captions and degrades to an embedded template pack, so it never fails.
//! The `poster` module is the pure rasterizer producing the embedded backup
//! poster.

pub mod poster;
pub mod sections;
pub mod templates;

use promo_core::{CaptionSet, Language, StructuredOffer, StyleId};
use promo_llm::TextProvider;
use std::sync::Arc;
use tracing::warn;

pub use poster::{render as render_poster, BusinessCategory, POSTER_HEIGHT, POSTER_WIDTH};

pub struct CaptionComposer {
    provider: Arc<dyn TextProvider>,
}

impl CaptionComposer {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Compose per-platform captions for an offer.
    ///
    /// Total: provider output is scanned for labeled sections and any gap is
    /// patched from the template pack; a failed provider call yields the
    /// fully templated set.
    pub async fn compose(
        &self,
        offer: &StructuredOffer,
        style: StyleId,
        language: Language,
    ) -> CaptionSet {
        let prompt = caption_prompt(offer, style, language);
        match self.provider.complete(&prompt).await {
            Ok(response) => templates::patch_empty(sections::parse_sections(&response), offer),
            Err(err) => {
                warn!(error = %err, "caption providers unavailable, using template pack");
                templates::fallback_captions(offer)
            }
        }
    }
}

fn caption_prompt(offer: &StructuredOffer, style: StyleId, language: Language) -> String {
    let lang = language.display_name();
    let offer_line = if offer.offer.trim().is_empty() {
        "No special offer"
    } else {
        offer.offer.as_str()
    };
    format!(
        r#"You are an AI marketing assistant for small local Indian businesses.

Generate promotional captions based on:
- Business Type: {business_type}
- Product: {product}
- Price: {price}
- Offer: {offer_line}
- Language: {lang}
- Style: {style} ({style_description})

IMPORTANT: All text MUST be in {lang} ONLY. Do NOT include any English words if the language is not English.

Generate captions for:

1. WhatsApp Caption (5-6 lines):
- Start with an attention-grabbing emoji line
- Mention the product and offer clearly
- Add urgency or excitement
- Include a call-to-action
- End with shop location/contact hint
- Use 3-5 relevant emojis throughout

2. Instagram Caption (5-6 lines):
- Start with a catchy hook line with emojis
- Describe the product/offer creatively
- Add a relatable or fun line
- Include a strong call-to-action
- End with 5-8 relevant hashtags in {lang}
- Make it engaging and shareable

3. Facebook Caption (5-6 lines):
- Start with a warm greeting or announcement
- Highlight the product and special offer
- Add value proposition (why customers should care)
- Include testimonial-style line or social proof
- End with call-to-action and invitation
- Use 2-3 emojis for visual appeal

Format your response EXACTLY as:
POSTER_TEXT:
[Headline text for poster]
[Price line]
[Offer line if applicable]

WHATSAPP:
[5-6 line creative caption with emojis]

INSTAGRAM:
[5-6 line creative caption with hashtags]

FACEBOOK:
[5-6 line creative caption]"#,
        business_type = offer.business_type,
        product = offer.product,
        price = offer.price,
        style = style.as_str(),
        style_description = style.description(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use promo_llm::ProviderError;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl TextProvider for CannedProvider {
        fn name(&self) -> &'static str {
            "canned"
        }
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct DownProvider;

    #[async_trait]
    impl TextProvider for DownProvider {
        fn name(&self) -> &'static str {
            "down"
        }
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Err(ProviderError::Unavailable("simulated outage".into()))
        }
    }

    fn offer() -> StructuredOffer {
        StructuredOffer {
            product: "Fresh Mango Juice".into(),
            price: "₹40".into(),
            offer: "Buy 2 Get 1 Free".into(),
            business_type: "Juice Shop".into(),
        }
    }

    #[test]
    fn test_caption_prompt_carries_offer_fields() {
        let prompt = caption_prompt(&offer(), StyleId::Friendly, Language::Hi);
        assert!(prompt.contains("- Language: Hindi"));
        assert!(prompt.contains("All text MUST be in Hindi ONLY"));
        assert!(prompt.contains("- Product: Fresh Mango Juice"));
        assert!(prompt.contains("WHATSAPP:"));
        assert!(prompt.contains("POSTER_TEXT:"));
    }

    #[test]
    fn test_caption_prompt_names_style_and_platform_constraints() {
        let prompt = caption_prompt(&offer(), StyleId::Festive, Language::En);
        // the chosen poster style steers the captions too
        assert!(prompt.contains("- Style: festive"));
        assert!(prompt.contains(StyleId::Festive.description()));
        // per-platform constraint bullets
        assert!(prompt.contains("End with shop location/contact hint"));
        assert!(prompt.contains("End with 5-8 relevant hashtags in English"));
        assert!(prompt.contains("Include testimonial-style line or social proof"));
    }

    #[test]
    fn test_caption_prompt_defaults_missing_offer() {
        let bare = StructuredOffer::new("Hot Samosa");
        let prompt = caption_prompt(&bare, StyleId::Friendly, Language::En);
        assert!(prompt.contains("- Offer: No special offer"));
    }

    #[tokio::test]
    async fn test_compose_uses_provider_sections() {
        let composer = CaptionComposer::new(Arc::new(CannedProvider(
            "WHATSAPP: wa!\nINSTAGRAM: ig!\nFACEBOOK: fb!\nPOSTER_TEXT: Juice ₹40",
        )));
        let set = composer.compose(&offer(), StyleId::Friendly, Language::En).await;
        assert_eq!(set.whatsapp, "wa!");
        assert_eq!(set.instagram, "ig!");
        assert_eq!(set.facebook, "fb!");
        assert_eq!(set.poster_text, "Juice ₹40");
    }

    #[tokio::test]
    async fn test_compose_patches_missing_sections() {
        let composer = CaptionComposer::new(Arc::new(CannedProvider("WHATSAPP: only this one")));
        let set = composer.compose(&offer(), StyleId::Friendly, Language::En).await;
        assert_eq!(set.whatsapp, "only this one");
        // the rest comes from the template pack
        assert!(set.instagram.contains("Fresh Mango Juice"));
        assert!(!set.poster_text.is_empty());
    }

    #[tokio::test]
    async fn test_compose_total_under_provider_failure() {
        let composer = CaptionComposer::new(Arc::new(DownProvider));
        let set = composer.compose(&offer(), StyleId::LocalStyle, Language::Ta).await;
        assert!(set.whatsapp.contains("Fresh Mango Juice"));
        assert!(set.instagram.contains("#LocalBusiness"));
        assert!(!set.facebook.is_empty());
        assert!(!set.poster_text.is_empty());
    }
}
