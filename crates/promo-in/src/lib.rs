//! Promo In: free text to structured offer
//!
//! `InputInterpreter` turns a transcript string plus a language code into a
//! fully populated `(StructuredOffer, EnhancedCopy)` pair. The operation
//! never fails: provider errors and malformed responses both collapse onto
//! deterministic templated content, because the UI downstream must always
//! have something renderable.
//!
//! Fallback layers, outermost first:
//! 1. provider JSON parsed cleanly → per-field defaults patch any gaps
//! 2. provider answered but no recoverable JSON → raw-input fallback
//! 3. every provider failed → raw-input fallback, no network involved

pub mod defaults;
pub mod extract;
pub mod prompt;

use promo_core::{EnhancedCopy, Language, StructuredOffer};
use promo_llm::TextProvider;
use std::sync::Arc;
use tracing::warn;

pub struct InputInterpreter {
    provider: Arc<dyn TextProvider>,
}

impl InputInterpreter {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Interpret raw user text into structured offer data plus enhanced copy.
    ///
    /// Total: always returns a fully populated pair, even when every external
    /// provider is down.
    pub async fn interpret(
        &self,
        raw_input: &str,
        language: Language,
    ) -> (StructuredOffer, EnhancedCopy) {
        let prompt = prompt::extraction_prompt(raw_input, language);

        match self.provider.complete(&prompt).await {
            Ok(response) => match extract::parse_payload(&response) {
                Some(payload) => defaults::fill(payload, raw_input),
                None => {
                    warn!("no recoverable JSON in provider response, using raw-input fallback");
                    defaults::from_raw_input(raw_input)
                }
            },
            Err(err) => {
                warn!(error = %err, "text providers unavailable, using raw-input fallback");
                defaults::from_raw_input(raw_input)
            }
        }
    }
}
