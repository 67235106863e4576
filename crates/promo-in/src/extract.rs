//! JSON recovery from free-text provider responses.
//!
//! Providers wrap their JSON in prose, code fences, or trailing commentary.
//! The scanner locates the first balanced `{...}` span (string- and
//! escape-aware) and parses it against the fixed extraction schema. Both
//! steps report failure as `None`; callers compose their fallback logic
//! explicitly instead of catching exceptions.

use serde::Deserialize;

/// Raw payload shape the extraction prompt asks for
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedPayload {
    pub product: String,
    pub price: String,
    pub offer: String,
    pub business_type: String,
    pub enhanced_prompt: Option<ParsedEnhanced>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedEnhanced {
    pub headline: String,
    pub tagline: String,
    pub offer_highlight: String,
    pub detailed_features: Vec<String>,
    pub full_description: String,
    pub call_to_action: String,
}

/// Locate the first balanced top-level `{...}` span in arbitrary text
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Recover and parse the extraction payload from a provider response
pub fn parse_payload(response: &str) -> Option<ParsedPayload> {
    let span = first_json_object(response)?;
    serde_json::from_str(span).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_with_surrounding_prose() {
        let text = "Sure! Here is your JSON:\n{\"product\": \"Juice\"}\nHope that helps.";
        assert_eq!(first_json_object(text), Some("{\"product\": \"Juice\"}"));
    }

    #[test]
    fn test_nested_objects_stay_balanced() {
        let text = r#"prefix {"a": {"b": 1}, "c": 2} suffix"#;
        assert_eq!(first_json_object(text), Some(r#"{"a": {"b": 1}, "c": 2}"#));
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"note": "has } brace and \" quote"}"#;
        assert_eq!(first_json_object(text), Some(text));
    }

    #[test]
    fn test_unbalanced_returns_none() {
        assert_eq!(first_json_object("{\"a\": 1"), None);
        assert_eq!(first_json_object("no json here"), None);
    }

    #[test]
    fn test_parse_full_payload() {
        let response = r#"Here you go:
{
  "product": "Fresh Mango Juice",
  "price": "₹40",
  "offer": "Buy 2 Get 1 Free",
  "businessType": "Juice Shop",
  "enhancedPrompt": {
    "headline": "Sip The Summer!",
    "tagline": "Pure mango in every drop",
    "offerHighlight": "Today only!",
    "detailedFeatures": ["Fresh fruit daily"],
    "fullDescription": "Five sentences here.",
    "callToAction": "Visit us now!"
  }
}"#;
        let payload = parse_payload(response).unwrap();
        assert_eq!(payload.product, "Fresh Mango Juice");
        assert_eq!(payload.business_type, "Juice Shop");
        let enhanced = payload.enhanced_prompt.unwrap();
        assert_eq!(enhanced.headline, "Sip The Summer!");
        assert_eq!(enhanced.detailed_features.len(), 1);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload = parse_payload(r#"{"product": "Tea"}"#).unwrap();
        assert_eq!(payload.product, "Tea");
        assert!(payload.price.is_empty());
        assert!(payload.enhanced_prompt.is_none());
    }
}
