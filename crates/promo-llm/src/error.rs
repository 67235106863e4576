//! Provider-boundary error taxonomy.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// Every configured provider failed for this call
    #[error("all providers unavailable: {0}")]
    Unavailable(String),

    /// Provider is not usable in this environment (missing API key)
    #[error("{0} not set")]
    MissingKey(&'static str),

    /// Transport-level failure (connect, timeout, non-2xx)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Call exceeded the gateway's per-provider timeout
    #[error("provider call timed out after {0}s")]
    Timeout(u64),

    /// Provider answered with a body we could not normalize to text
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Request URL could not be constructed
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
