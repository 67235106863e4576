//! Normalization of heterogeneous provider response envelopes.
//!
//! Different chat backends wrap their text differently: a bare JSON string,
//! `{"message": {"content": ...}}`, `{"content": ...}`, or `{"text": ...}`.
//! Each shape is modeled explicitly as one arm of a tagged union and
//! collapsed to a single plain string before leaving the gateway layer.

use serde::Deserialize;

/// Known response envelope shapes, tried in declaration order
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChatEnvelope {
    /// `{"message": {"content": "..."}}`
    Message { message: MessageBody },
    /// `{"content": "..."}`
    Content { content: String },
    /// `{"text": "..."}`
    Text { text: String },
    /// Bare JSON string
    Plain(String),
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub content: String,
}

impl ChatEnvelope {
    pub fn into_text(self) -> String {
        match self {
            ChatEnvelope::Message { message } => message.content,
            ChatEnvelope::Content { content } => content,
            ChatEnvelope::Text { text } => text,
            ChatEnvelope::Plain(text) => text,
        }
    }
}

/// Normalize a raw response body to plain text.
///
/// Bodies that parse as a known envelope are unwrapped; anything else is
/// returned verbatim (some backends send unframed text).
pub fn normalize_body(body: &str) -> String {
    match serde_json::from_str::<ChatEnvelope>(body) {
        Ok(envelope) => envelope.into_text(),
        Err(_) => body.to_string(),
    }
}
