//! Poster artifact: the output bundle of one generation cycle.

use crate::language::Language;
use crate::style::StyleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a poster image: either a remote URL resolved lazily by the
/// viewer, or an embedded encoded bitmap (PNG data URI) safe for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    Remote { url: String },
    Embedded { data_uri: String },
}

impl ImageRef {
    pub fn remote(url: impl Into<String>) -> Self {
        ImageRef::Remote { url: url.into() }
    }

    pub fn embedded(data_uri: impl Into<String>) -> Self {
        ImageRef::Embedded {
            data_uri: data_uri.into(),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, ImageRef::Embedded { .. })
    }
}

/// Per-platform caption strings plus the short poster text block.
/// An empty field means "use a generic templated caption", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionSet {
    pub whatsapp: String,
    pub instagram: String,
    pub facebook: String,
    /// Short multi-line headline/price/offer block rendered on the poster
    pub poster_text: String,
}

/// Final artifact bundle for one generation or regeneration request.
///
/// `backup_image` is always an embedded bitmap; `primary_image` is
/// preferentially a remote provider URL and degrades to the backup.
/// A new artifact wholly replaces the old one; nothing is mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterArtifact {
    pub id: Uuid,
    pub primary_image: ImageRef,
    pub backup_image: ImageRef,
    pub captions: CaptionSet,
    pub style: StyleId,
    pub language: Language,
    /// blake3 hash of the backup image bytes
    pub artifact_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ref_kinds() {
        assert!(ImageRef::embedded("data:image/png;base64,AAAA").is_embedded());
        assert!(!ImageRef::remote("https://example.com/p.png").is_embedded());
    }

    #[test]
    fn test_image_ref_serde_tagging() {
        let json = serde_json::to_string(&ImageRef::remote("https://x/y")).unwrap();
        assert!(json.contains("\"kind\":\"remote\""));
        let back: ImageRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ImageRef::remote("https://x/y"));
    }
}
