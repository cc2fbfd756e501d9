//! Client-side session persistence: auth tokens and user preferences.
//!
//! Everything lives in one JSON file. Signing out clears the tokens but keeps
//! the preferences, so a returning merchant keeps their language and theme.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Authenticated merchant session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

impl Session {
    /// A session without an expiry never expires on the client side.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|at| at <= now).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// User preferences, kept across sign-outs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred display language; `None` means the store's primary language
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    session: Option<Session>,
    #[serde(default)]
    preferences: Preferences,
}

/// File-backed store for the session and preferences.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    data: SessionFile,
}

impl SessionStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store; an unreadable or corrupt file is
    /// an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let data = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read session file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse session file {}", path.display()))?
        } else {
            debug!("No session file at {}, starting empty", path.display());
            SessionFile::default()
        };

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> Option<&Session> {
        self.data.session.as_ref()
    }

    /// The session if it has not expired at `now`.
    pub fn active_session(&self, now: DateTime<Utc>) -> Option<&Session> {
        self.session().filter(|session| !session.is_expired(now))
    }

    pub fn preferences(&self) -> &Preferences {
        &self.data.preferences
    }

    /// Store a new session and persist it.
    pub fn sign_in(&mut self, session: Session) -> Result<()> {
        let next = SessionFile {
            session: Some(session),
            preferences: self.data.preferences.clone(),
        };
        self.commit(next)?;
        info!("Session stored");
        Ok(())
    }

    /// Drop the tokens, keep the preferences.
    pub fn sign_out(&mut self) -> Result<()> {
        if self.data.session.is_none() {
            warn!("Sign out requested without an active session");
        }
        let next = SessionFile {
            session: None,
            preferences: self.data.preferences.clone(),
        };
        self.commit(next)?;
        info!("Session cleared");
        Ok(())
    }

    pub fn set_preferences(&mut self, preferences: Preferences) -> Result<()> {
        let next = SessionFile {
            session: self.data.session.clone(),
            preferences,
        };
        self.commit(next)
    }

    /// Write the store to disk through a temporary file and rename.
    pub fn save(&self) -> Result<()> {
        write_file(&self.path, &self.data)
    }

    /// Persist `next`, adopting it in memory only once it is on disk.
    fn commit(&mut self, next: SessionFile) -> Result<()> {
        write_file(&self.path, &next)?;
        self.data = next;
        Ok(())
    }
}

fn write_file(path: &Path, data: &SessionFile) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(data).context("Failed to serialize session file")?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!("Saved session file {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::TempDir;

    fn session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            access_token: "access-123".to_string(),
            refresh_token: Some("refresh-456".to_string()),
            expires_at,
            merchant_id: Some("store-1".to_string()),
        }
    }

    // ==================== Session Tests ====================

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        assert!(!session(None).is_expired(now));
        assert!(!session(Some(now + Duration::minutes(5))).is_expired(now));
        assert!(session(Some(now - Duration::seconds(1))).is_expired(now));
    }

    #[test]
    fn test_session_deserializes_minimal() {
        let session: Session = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(session.access_token, "abc");
        assert!(session.refresh_token.is_none());
        assert!(session.expires_at.is_none());
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(Theme::default(), Theme::System);
    }

    // ==================== SessionStore Tests ====================

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();

        assert!(store.session().is_none());
        assert_eq!(store.preferences(), &Preferences::default());
    }

    #[test]
    fn test_open_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let err = SessionStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse session file"));
    }

    #[test]
    fn test_sign_in_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = SessionStore::open(&path).unwrap();
        store.sign_in(session(None)).unwrap();

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.session(), Some(&session(None)));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_sign_out_keeps_preferences() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::open(&path).unwrap();
        store.sign_in(session(None)).unwrap();
        store
            .set_preferences(Preferences {
                language: Some("ar".to_string()),
                theme: Theme::Dark,
            })
            .unwrap();
        store.sign_out().unwrap();

        let reopened = SessionStore::open(&path).unwrap();
        assert!(reopened.session().is_none());
        assert_eq!(reopened.preferences().language.as_deref(), Some("ar"));
        assert_eq!(reopened.preferences().theme, Theme::Dark);
    }

    #[test]
    fn test_active_session_filters_expired() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::open(dir.path().join("session.json")).unwrap();
        let now = Utc::now();

        store.sign_in(session(Some(now - Duration::hours(1)))).unwrap();
        assert!(store.active_session(now).is_none());
        assert!(store.session().is_some());
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "regular file").unwrap();

        let mut store = SessionStore::open(blocker.join("session.json")).unwrap();

        assert!(store.sign_in(session(None)).is_err());
        assert!(store.session().is_none());

        let result = store.set_preferences(Preferences {
            language: Some("en".to_string()),
            theme: Theme::Dark,
        });
        assert!(result.is_err());
        assert_eq!(store.preferences(), &Preferences::default());
    }
}
