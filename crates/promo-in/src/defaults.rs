//! Deterministic fallback content.
//!
//! Two layers: per-field templated defaults applied over a parsed payload,
//! and a whole-record fallback built from the raw input alone when the
//! provider call or JSON recovery failed. A small regex pass recovers price
//! and buy-N-get-M offers from the raw text so the offline path still carries
//! the numbers the user actually spoke.

use crate::extract::{ParsedEnhanced, ParsedPayload};
use lazy_static::lazy_static;
use promo_core::{EnhancedCopy, StructuredOffer};
use regex::Regex;

lazy_static! {
    /// "₹40", "Rs. 40", "rs 40"
    static ref PRICE_PREFIXED: Regex = Regex::new(r"(?i)(?:₹|rs\.?)\s*(\d+)").unwrap();
    /// "40 rupees", "40 rs"
    static ref PRICE_SUFFIXED: Regex = Regex::new(r"(?i)(\d+)\s*(?:rupees?|rs)\b").unwrap();
    /// "buy 2 get 1", "buy 2 get 1 free"
    static ref BUY_N_GET_M: Regex =
        Regex::new(r"(?i)buy\s+(\d+)\s+get\s+(\d+)(\s+free)?").unwrap();
    /// "20% off"
    static ref PERCENT_OFF: Regex = Regex::new(r"(?i)(\d+)\s*%\s*off").unwrap();
}

/// Recover a price string from raw text, normalized to "₹N"
pub fn heuristic_price(text: &str) -> Option<String> {
    PRICE_PREFIXED
        .captures(text)
        .or_else(|| PRICE_SUFFIXED.captures(text))
        .map(|cap| format!("₹{}", &cap[1]))
}

/// Recover an offer phrase from raw text
pub fn heuristic_offer(text: &str) -> Option<String> {
    if let Some(cap) = BUY_N_GET_M.captures(text) {
        let free = if cap.get(3).is_some() { " Free" } else { "" };
        return Some(format!("Buy {} Get {}{}", &cap[1], &cap[2], free));
    }
    PERCENT_OFF
        .captures(text)
        .map(|cap| format!("{}% OFF", &cap[1]))
}

fn default_features() -> Vec<String> {
    vec![
        "✓ Premium quality products sourced with care".to_string(),
        "✓ Unbeatable prices that fit your budget".to_string(),
        "✓ Trusted by hundreds of happy customers".to_string(),
        "✓ Fresh and authentic guaranteed".to_string(),
    ]
}

fn default_full_description(product: &str) -> String {
    let subject = if product.is_empty() { "products" } else { product };
    format!(
        "Discover the finest {subject} that will exceed your expectations! We take pride in \
         offering only the best quality at prices that won't break the bank. Our customers \
         love us for our commitment to excellence and value. Whether you're treating yourself \
         or your loved ones, this is the perfect choice. Visit us today and experience the \
         difference - you won't be disappointed!"
    )
}

/// Fill every missing or empty field of a parsed payload with a templated
/// default, interpolating the product name where known.
pub fn fill(payload: ParsedPayload, raw_input: &str) -> (StructuredOffer, EnhancedCopy) {
    let product = if payload.product.is_empty() {
        first_words(raw_input, 3)
    } else {
        payload.product
    };

    let offer = StructuredOffer {
        price: if payload.price.is_empty() {
            heuristic_price(raw_input).unwrap_or_default()
        } else {
            payload.price
        },
        offer: if payload.offer.is_empty() {
            heuristic_offer(raw_input).unwrap_or_default()
        } else {
            payload.offer
        },
        business_type: if payload.business_type.is_empty() {
            "Shop".to_string()
        } else {
            payload.business_type
        },
        product: product.clone(),
    };

    let parsed = payload.enhanced_prompt.unwrap_or_default();
    let enhanced = fill_enhanced(parsed, &product, &offer.offer);
    (offer, enhanced)
}

fn fill_enhanced(parsed: ParsedEnhanced, product: &str, offer_text: &str) -> EnhancedCopy {
    EnhancedCopy {
        headline: non_empty(parsed.headline, || product.to_string()),
        tagline: non_empty(parsed.tagline, || {
            "Experience the best quality at unbeatable prices!".to_string()
        }),
        offer_highlight: non_empty(parsed.offer_highlight, || {
            if offer_text.is_empty() {
                "🎉 Special limited-time offer just for you! Don't miss out on this amazing deal!"
                    .to_string()
            } else {
                offer_text.to_string()
            }
        }),
        detailed_features: if parsed.detailed_features.is_empty() {
            default_features()
        } else {
            parsed.detailed_features
        },
        full_description: non_empty(parsed.full_description, || {
            default_full_description(product)
        }),
        call_to_action: non_empty(parsed.call_to_action, || {
            "Visit us today - Limited time offer!".to_string()
        }),
    }
}

/// Whole-record fallback built from the raw input alone, no provider output.
pub fn from_raw_input(raw_input: &str) -> (StructuredOffer, EnhancedCopy) {
    let product = first_words(raw_input, 3);

    let offer = StructuredOffer {
        product: product.clone(),
        price: heuristic_price(raw_input).unwrap_or_default(),
        offer: heuristic_offer(raw_input).unwrap_or_default(),
        business_type: "Shop".to_string(),
    };

    let enhanced = EnhancedCopy {
        headline: format!("Amazing {raw_input} - Don't Miss Out!"),
        tagline: "Premium quality that you deserve at prices you'll love!".to_string(),
        offer_highlight:
            "🎁 Special offer available for a limited time only! Grab yours before it's gone!"
                .to_string(),
        detailed_features: vec![
            "✓ Top-notch quality you can trust".to_string(),
            "✓ Best prices in the market guaranteed".to_string(),
            "✓ Loved by our loyal customers".to_string(),
            "✓ 100% satisfaction promised".to_string(),
        ],
        full_description: format!(
            "Looking for the best {raw_input}? You've come to the right place! We offer premium \
             quality products that are carefully selected to meet your highest standards. Our \
             unbeatable prices mean you get amazing value without compromising on quality. \
             Thousands of happy customers trust us for their needs. Come visit us today and see \
             why we're the preferred choice in town!"
        ),
        call_to_action: "Hurry! Visit us today!".to_string(),
    };

    (offer, enhanced)
}

fn first_words(text: &str, count: usize) -> String {
    text.split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: String, default: impl FnOnce() -> String) -> String {
    if value.trim().is_empty() {
        default()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_heuristics() {
        assert_eq!(heuristic_price("Mango juice ₹40 today"), Some("₹40".into()));
        assert_eq!(heuristic_price("juice 40 rupees"), Some("₹40".into()));
        assert_eq!(heuristic_price("Rs. 99 only"), Some("₹99".into()));
        assert_eq!(heuristic_price("fresh juice"), None);
    }

    #[test]
    fn test_offer_heuristics() {
        assert_eq!(
            heuristic_offer("buy 2 get 1 free today"),
            Some("Buy 2 Get 1 Free".into())
        );
        assert_eq!(heuristic_offer("Buy 3 Get 2"), Some("Buy 3 Get 2".into()));
        assert_eq!(heuristic_offer("flat 20% off"), Some("20% OFF".into()));
        assert_eq!(heuristic_offer("no deal"), None);
    }

    #[test]
    fn test_raw_fallback_is_fully_populated() {
        let (offer, enhanced) = from_raw_input("Mango juice 40 rupees buy 2 get 1");
        assert_eq!(offer.product, "Mango juice 40");
        assert_eq!(offer.price, "₹40");
        assert_eq!(offer.offer, "Buy 2 Get 1");
        assert_eq!(offer.business_type, "Shop");
        assert!(enhanced.is_complete());
        assert!(!enhanced.detailed_features.is_empty());
    }

    #[test]
    fn test_fill_keeps_parsed_values() {
        let payload = ParsedPayload {
            product: "Fresh Mango Juice".into(),
            price: "₹40".into(),
            offer: String::new(),
            business_type: "Juice Shop".into(),
            enhanced_prompt: None,
        };
        let (offer, enhanced) = fill(payload, "mango juice buy 2 get 1");
        assert_eq!(offer.product, "Fresh Mango Juice");
        assert_eq!(offer.business_type, "Juice Shop");
        // missing offer recovered from the raw text
        assert_eq!(offer.offer, "Buy 2 Get 1");
        assert!(enhanced.is_complete());
        assert!(enhanced.full_description.contains("Fresh Mango Juice"));
    }

    #[test]
    fn test_fill_defaults_headline_to_product() {
        let payload = ParsedPayload {
            product: "Hot Samosa".into(),
            ..Default::default()
        };
        let (_, enhanced) = fill(payload, "samosa");
        assert_eq!(enhanced.headline, "Hot Samosa");
    }
}
