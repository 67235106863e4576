//! Keyless conversational bridge client (first-priority text provider).
//!
//! Talks to a free chat relay that needs no API key. The endpoint answers
//! with whichever envelope shape its upstream model produced, so the body
//! always goes through `response::normalize_body`.

use crate::error::ProviderError;
use crate::response::normalize_body;
use crate::TextProvider;
use async_trait::async_trait;
use serde_json::json;

const DEFAULT_BASE_URL: &str = "https://api.puter.com/v1";

pub struct BridgeClient {
    base_url: String,
    http: reqwest::Client,
}

impl BridgeClient {
    pub fn new() -> Self {
        let base_url = std::env::var("PROMO_BRIDGE_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn chat_endpoint(&self) -> String {
        format!("{}/ai/chat", self.base_url)
    }
}

impl Default for BridgeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextProvider for BridgeClient {
    fn name(&self) -> &'static str {
        "bridge"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .http
            .post(self.chat_endpoint())
            .json(&json!({ "message": prompt }))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let text = normalize_body(&body);
        if text.trim().is_empty() {
            return Err(ProviderError::Malformed("empty bridge response".into()));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = BridgeClient::with_base_url("http://localhost:9999/");
        assert_eq!(client.chat_endpoint(), "http://localhost:9999/ai/chat");
    }
}
