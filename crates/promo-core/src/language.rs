//! Supported input/output languages.
//!
//! The language code arrives from the external capture subsystem alongside the
//! transcript. It is a pass-through parameter: providers do the actual
//! translation work, we only name the language inside prompts.

use serde::{Deserialize, Serialize};

/// Closed set of supported language codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Ta,
}

impl Language {
    /// Human-readable name used inside provider prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ta => "Tamil",
        }
    }

    /// Two-letter code as sent by the capture layer
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "ta" => Ok(Language::Ta),
            other => Err(format!("unsupported language code: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Language::En.display_name(), "English");
        assert_eq!(Language::Hi.display_name(), "Hindi");
        assert_eq!(Language::Ta.display_name(), "Tamil");
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" TA ".parse::<Language>().unwrap(), Language::Ta);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Language::Hi).unwrap();
        assert_eq!(json, "\"hi\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Hi);
    }
}
