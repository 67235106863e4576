//! Promo Core: domain data model, style catalog, and unified error model
//!
//! Shared leaf crate for the promotion-generation pipeline. Everything here is
//! plain data: the structured offer extracted from user input, the enhanced
//! marketing copy, the caption bundle, and the final poster artifact.

pub mod artifact;
pub mod error;
pub mod language;
pub mod offer;
pub mod style;

pub use artifact::{CaptionSet, ImageRef, PosterArtifact};
pub use error::PromoError;
pub use language::Language;
pub use offer::{EnhancedCopy, StructuredOffer};
pub use style::{StyleId, StylePalette};

/// Version of the promotion engine
pub const PROMO_VERSION: &str = "1.0.0";
