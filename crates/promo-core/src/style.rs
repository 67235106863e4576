//! Style catalog: fixed palette and prompt phrase per poster style.
//!
//! The catalog is a static literal table, built once at first use and never
//! mutated. Both the renderer (colors) and the prompt builders (descriptive
//! phrase) read from it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Fixed enumeration of poster styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleId {
    Friendly,
    Festive,
    OfferFocused,
    LocalStyle,
}

/// Color palette for one style. Colors are sRGB hex strings ("#RRGGBB").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePalette {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub background_gradient: [&'static str; 2],
    pub text_color: &'static str,
}

static FRIENDLY: Lazy<StylePalette> = Lazy::new(|| StylePalette {
    primary_color: "#4CAF50",
    secondary_color: "#81C784",
    accent_color: "#2E7D32",
    background_gradient: ["#E8F5E9", "#C8E6C9"],
    text_color: "#1B5E20",
});

static FESTIVE: Lazy<StylePalette> = Lazy::new(|| StylePalette {
    primary_color: "#FF5722",
    secondary_color: "#FF8A65",
    accent_color: "#E64A19",
    background_gradient: ["#FFF3E0", "#FFE0B2"],
    text_color: "#BF360C",
});

static OFFER_FOCUSED: Lazy<StylePalette> = Lazy::new(|| StylePalette {
    primary_color: "#F44336",
    secondary_color: "#EF5350",
    accent_color: "#D32F2F",
    background_gradient: ["#FFEBEE", "#FFCDD2"],
    text_color: "#B71C1C",
});

static LOCAL_STYLE: Lazy<StylePalette> = Lazy::new(|| StylePalette {
    primary_color: "#FF6B35",
    secondary_color: "#F7931E",
    accent_color: "#C54A1B",
    background_gradient: ["#FFF8E1", "#FFECB3"],
    text_color: "#5D4037",
});

impl StyleId {
    /// Palette used by the deterministic renderer
    pub fn palette(&self) -> &'static StylePalette {
        match self {
            StyleId::Friendly => &FRIENDLY,
            StyleId::Festive => &FESTIVE,
            StyleId::OfferFocused => &OFFER_FOCUSED,
            StyleId::LocalStyle => &LOCAL_STYLE,
        }
    }

    /// Descriptive phrase injected into provider prompts
    pub fn description(&self) -> &'static str {
        match self {
            StyleId::Friendly => {
                "warm, welcoming, and approachable with soft green colors and friendly vibes"
            }
            StyleId::Festive => {
                "celebratory, vibrant, and colorful with festive decorations and bright colors"
            }
            StyleId::OfferFocused => {
                "bold, attention-grabbing with prominent red/orange colors and urgency feel"
            }
            StyleId::LocalStyle => {
                "traditional, authentic Indian local market style with warm earthy colors"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleId::Friendly => "friendly",
            StyleId::Festive => "festive",
            StyleId::OfferFocused => "offerFocused",
            StyleId::LocalStyle => "localStyle",
        }
    }
}

impl Default for StyleId {
    fn default() -> Self {
        StyleId::Friendly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_palette() {
        for style in [
            StyleId::Friendly,
            StyleId::Festive,
            StyleId::OfferFocused,
            StyleId::LocalStyle,
        ] {
            let palette = style.palette();
            assert!(palette.primary_color.starts_with('#'));
            assert_eq!(palette.background_gradient.len(), 2);
            assert!(!style.description().is_empty());
        }
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_string(&StyleId::OfferFocused).unwrap();
        assert_eq!(json, "\"offerFocused\"");
    }
}
