//! Language registry: metadata for languages a store can enable.
//!
//! The registry is read-only reference data (names and text direction). It
//! does not decide which languages a store uses; that comes from the store's
//! own [`LanguageList`](crate::i18n::LanguageList). Codes missing from the
//! registry are still valid store languages, they just have no metadata.

use crate::i18n::language::LanguageCode;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Layout direction of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Metadata for a known language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ar", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Arabic", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية", "English")
    pub native_name: &'static str,

    pub direction: TextDirection,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance, initializing it on first use.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code (case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Text direction for a code; unknown codes are laid out left to right.
    pub fn direction(&self, code: &str) -> TextDirection {
        self.get_by_code(code)
            .map(|lang| lang.direction)
            .unwrap_or(TextDirection::Ltr)
    }

    /// Human-readable label for a language, used to caption per-language inputs.
    ///
    /// Falls back to the uppercased code when the language is unknown.
    pub fn display_name(&self, code: &LanguageCode) -> String {
        self.get_by_code(code.as_str())
            .map(|lang| lang.name.to_string())
            .unwrap_or_else(|| code.as_str().to_uppercase())
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            direction: TextDirection::Rtl,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            direction: TextDirection::Ltr,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            direction: TextDirection::Ltr,
        },
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            direction: TextDirection::Ltr,
        },
        LanguageConfig {
            code: "ur",
            name: "Urdu",
            native_name: "اردو",
            direction: TextDirection::Rtl,
        },
    ]
}
