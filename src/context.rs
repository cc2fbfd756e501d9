//! Application context: store languages plus observable user preferences.
//!
//! Constructed once at startup and passed down explicitly. Screens that
//! react to language or theme changes hold a `watch::Receiver<Preferences>`
//! from [`AppContext::subscribe`].

use crate::config::Config;
use crate::error::I18nError;
use crate::i18n::{LanguageCode, LanguageList, LanguageRegistry, TextDirection};
use crate::session::{Preferences, SessionStore, Theme};
use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, warn};

pub struct AppContext {
    languages: LanguageList,
    store: SessionStore,
    preferences: watch::Sender<Preferences>,
}

impl AppContext {
    /// Build the context from configuration and an opened session store.
    ///
    /// A stored language that is no longer one of the store languages is
    /// dropped so the display falls back to the primary language. The
    /// configured `display_language` only applies when no language is stored.
    pub fn new(config: &Config, store: SessionStore) -> Self {
        let mut preferences = store.preferences().clone();

        if let Some(code) = preferences.language.as_deref() {
            if !config.store_languages.contains(code) {
                warn!("Stored language '{}' is not a store language, ignoring", code);
                preferences.language = None;
            }
        }
        if preferences.language.is_none() {
            preferences.language = config
                .display_language
                .as_ref()
                .map(|code| code.as_str().to_string());
        }

        let (sender, _) = watch::channel(preferences);
        Self {
            languages: config.store_languages.clone(),
            store,
            preferences: sender,
        }
    }

    pub fn languages(&self) -> &LanguageList {
        &self.languages
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session_store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences.borrow().clone()
    }

    /// Receive every future preference change.
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.preferences.subscribe()
    }

    /// The language content is displayed in: the preference, else the primary.
    pub fn display_language(&self) -> LanguageCode {
        self.preferences
            .borrow()
            .language
            .as_deref()
            .and_then(|code| self.languages.position(code))
            .and_then(|position| self.languages.get(position))
            .unwrap_or_else(|| self.languages.primary())
            .clone()
    }

    pub fn text_direction(&self) -> TextDirection {
        LanguageRegistry::get().direction(self.display_language().as_str())
    }

    /// Switch the display language, persist it, and notify subscribers.
    ///
    /// Only store languages are accepted.
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        let position = self
            .languages
            .position(code)
            .ok_or_else(|| I18nError::UnknownLanguage(code.to_string()))?;
        let code = self
            .languages
            .get(position)
            .map(|code| code.as_str().to_string());

        self.apply(|preferences| preferences.language = code)?;
        info!("Display language set to {}", self.display_language());
        Ok(())
    }

    /// Switch the theme, persist it, and notify subscribers.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.apply(|preferences| preferences.theme = theme)?;
        info!("Theme set to {:?}", theme);
        Ok(())
    }

    fn apply(&mut self, change: impl FnOnce(&mut Preferences)) -> Result<()> {
        let mut next = self.preferences();
        change(&mut next);

        self.store.set_preferences(next.clone())?;
        self.preferences.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        Ok(())
    }
}
