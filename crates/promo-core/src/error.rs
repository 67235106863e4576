//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromoError {
    /// All configured providers failed for one call.
    #[error("PROVIDER/{0}")]
    ProviderUnavailable(String),

    /// Provider returned text without a recoverable structured payload.
    #[error("MALFORMED/{0}")]
    MalformedResponse(String),

    /// Request rejected before the pipeline started (e.g. empty input).
    #[error("INPUT/{0}")]
    InvalidInput(String),

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}
