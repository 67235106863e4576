//! Structured offer and enhanced marketing copy.
//!
//! Both records obey the totality invariant: after the interpreter returns,
//! every field is populated (empty string is allowed only where the data
//! model says so), regardless of provider behavior.

use serde::{Deserialize, Serialize};

/// Structured promotion data extracted from free-text user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredOffer {
    /// Main product or service (e.g. "Fresh Mango Juice")
    pub product: String,
    /// Price text, with currency symbol when known; may be empty
    pub price: String,
    /// Offer text (e.g. "Buy 2 Get 1 Free"); may be empty
    pub offer: String,
    /// Inferred business type; never empty, defaults to "Shop"
    pub business_type: String,
}

impl StructuredOffer {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            price: String::new(),
            offer: String::new(),
            business_type: "Shop".to_string(),
        }
    }
}

impl Default for StructuredOffer {
    fn default() -> Self {
        Self::new("")
    }
}

/// AI-enhanced promotional copy attached to a structured offer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedCopy {
    /// Catchy headline, 5-8 words
    pub headline: String,
    /// Emotional tagline, 8-12 words
    pub tagline: String,
    /// The offer presented with urgency
    pub offer_highlight: String,
    /// Single-sentence selling points
    pub detailed_features: Vec<String>,
    /// 4-5 sentence promotional paragraph
    pub full_description: String,
    /// Short, urgent call to action
    pub call_to_action: String,
}

impl EnhancedCopy {
    /// True when every required text field is non-empty
    pub fn is_complete(&self) -> bool {
        !self.headline.is_empty()
            && !self.tagline.is_empty()
            && !self.offer_highlight.is_empty()
            && !self.full_description.is_empty()
            && !self.call_to_action.is_empty()
    }
}
