use crate::i18n::{LanguageCode, LanguageList};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Store languages, primary first
    pub store_languages: LanguageList,

    // Display language used when no language preference is stored;
    // must be one of the store languages
    pub display_language: Option<LanguageCode>,

    // Session / preferences persistence
    pub session_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_languages = std::env::var("STORE_LANGUAGES")
            .context("STORE_LANGUAGES not set")?;
        let store_languages = LanguageList::parse(&store_languages)
            .with_context(|| format!("Invalid STORE_LANGUAGES: '{}'", store_languages))?;

        let display_language = match std::env::var("DISPLAY_LANGUAGE") {
            Ok(code) if !code.trim().is_empty() => {
                let code = LanguageCode::new(code.trim()).context("Invalid DISPLAY_LANGUAGE")?;
                if !store_languages.contains(code.as_str()) {
                    anyhow::bail!(
                        "DISPLAY_LANGUAGE '{}' is not one of STORE_LANGUAGES ({})",
                        code,
                        store_languages
                    );
                }
                Some(code)
            }
            _ => None,
        };

        Ok(Self {
            store_languages,
            display_language,
            session_file: std::env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/session.json")),
        })
    }
}
