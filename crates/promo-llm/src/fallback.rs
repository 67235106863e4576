//! Priority-order fallback across text providers.
//!
//! The gateway tries each provider in order; on any failure it moves to the
//! next. Each attempt is bounded by a timeout and retried once, which is the
//! whole retry budget — semantic fallback content is the caller's job, this
//! layer never synthesizes text of its own.

use crate::error::ProviderError;
use crate::TextProvider;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct FallbackConfig {
    /// Per-provider call timeout in seconds
    pub timeout_secs: u64,
    /// Extra attempts per provider after the first failure
    pub retries_per_provider: u32,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            retries_per_provider: 1,
        }
    }
}

/// Composite text client trying providers in fixed priority order
pub struct FallbackTextClient {
    providers: Vec<Arc<dyn TextProvider>>,
    config: FallbackConfig,
}

impl FallbackTextClient {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self::with_config(providers, FallbackConfig::default())
    }

    pub fn with_config(providers: Vec<Arc<dyn TextProvider>>, config: FallbackConfig) -> Self {
        Self { providers, config }
    }

    /// Default production stack: keyless bridge first, keyed API second
    pub fn standard() -> Self {
        Self::new(vec![
            Arc::new(crate::BridgeClient::new()),
            Arc::new(crate::GeminiClient::new()),
        ])
    }

    async fn attempt(
        &self,
        provider: &Arc<dyn TextProvider>,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let deadline = Duration::from_secs(self.config.timeout_secs);
        match tokio::time::timeout(deadline, provider.complete(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.config.timeout_secs)),
        }
    }
}

#[async_trait]
impl TextProvider for FallbackTextClient {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let mut last_error = String::from("no providers configured");

        for (index, provider) in self.providers.iter().enumerate() {
            for attempt in 0..=self.config.retries_per_provider {
                match self.attempt(provider, prompt).await {
                    Ok(text) => {
                        if index > 0 || attempt > 0 {
                            info!(
                                provider = provider.name(),
                                attempt = attempt + 1,
                                "fallback provider succeeded"
                            );
                        }
                        return Ok(text);
                    }
                    Err(err) => {
                        warn!(
                            provider = provider.name(),
                            attempt = attempt + 1,
                            error = %err,
                            "text provider failed"
                        );
                        last_error = format!("{}: {}", provider.name(), err);
                        // A missing key will not appear between attempts
                        if matches!(err, ProviderError::MissingKey(_)) {
                            break;
                        }
                    }
                }
            }
        }

        Err(ProviderError::Unavailable(last_error))
    }
}
