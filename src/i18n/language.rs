//! Language types: validated language codes and the ordered store language list.
//!
//! The order of a [`LanguageList`] is significant: position 0 is the primary
//! language whose fields are mandatory, every later position is a secondary
//! language whose fields are optional.

use crate::error::I18nError;
use crate::i18n::field_key::{capitalize_code, compose_key};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// A validated language code (e.g. "ar", "en").
///
/// Codes are ASCII letters only. Regional variants such as `en-US` are
/// rejected because the hyphen cannot be carried into a field key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code, validating its format.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` for a non-empty, purely alphabetic code
    /// * `Err(I18nError::InvalidLanguageCode)` otherwise
    pub fn new(code: &str) -> Result<Self, I18nError> {
        if Self::is_valid(code) {
            Ok(Self(code.to_string()))
        } else {
            Err(I18nError::InvalidLanguageCode(code.to_string()))
        }
    }

    /// Check whether a string is usable as a language code.
    pub fn is_valid(code: &str) -> bool {
        let regex = CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z]+$").unwrap());
        regex.is_match(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The suffix appended to secondary-language field keys ("ar" -> "Ar").
    pub fn capitalized(&self) -> String {
        capitalize_code(&self.0)
    }

    /// Case-insensitive comparison against a raw code.
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = I18nError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::new(&code)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

/// The ordered, non-empty list of languages a store publishes content in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LanguageList {
    codes: Vec<LanguageCode>,
}

impl LanguageList {
    /// Build a language list from raw codes, primary language first.
    ///
    /// Fails on an empty list, a malformed code, or a code listed twice
    /// (compared case-insensitively, since "en" and "EN" would produce the
    /// same field keys).
    pub fn new<I, S>(codes: I) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated: Vec<LanguageCode> = Vec::new();

        for code in codes {
            let code = LanguageCode::new(code.as_ref())?;
            if validated.iter().any(|existing| existing.matches(code.as_str())) {
                return Err(I18nError::DuplicateLanguage(code.0));
            }
            validated.push(code);
        }

        if validated.is_empty() {
            return Err(I18nError::EmptyLanguageList);
        }

        Ok(Self { codes: validated })
    }

    /// Parse a comma separated list such as `"ar,en"`.
    ///
    /// Whitespace around entries is ignored, empty entries are skipped.
    pub fn parse(list: &str) -> Result<Self, I18nError> {
        Self::new(list.split(',').map(str::trim).filter(|code| !code.is_empty()))
    }

    /// The primary language (position 0).
    pub fn primary(&self) -> &LanguageCode {
        &self.codes[0]
    }

    /// All secondary languages, in order.
    pub fn secondary(&self) -> &[LanguageCode] {
        &self.codes[1..]
    }

    pub fn get(&self, position: usize) -> Option<&LanguageCode> {
        self.codes.get(position)
    }

    /// Position of a language in the list, if configured.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|candidate| candidate.matches(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Flat field key of `base_field` for the language at `position`.
    ///
    /// # Returns
    /// * `Ok(key)` for a position inside the list
    /// * `Err(I18nError::PositionOutOfRange)` otherwise, never the primary key
    pub fn field_key(&self, position: usize, base_field: &str) -> Result<String, I18nError> {
        let code = self
            .codes
            .get(position)
            .ok_or(I18nError::PositionOutOfRange {
                position,
                languages: self.codes.len(),
            })?;
        Ok(compose_key(base_field, position, code))
    }

    /// Key of `base_field` in the primary language: the bare field name.
    pub fn primary_key(&self, base_field: &str) -> String {
        compose_key(base_field, 0, self.primary())
    }

    /// `(position, code, key)` of `base_field` for every language, in list order.
    pub fn keyed<'a>(
        &'a self,
        base_field: &'a str,
    ) -> impl Iterator<Item = (usize, &'a LanguageCode, String)> + 'a {
        self.codes
            .iter()
            .enumerate()
            .map(move |(position, code)| (position, code, compose_key(base_field, position, code)))
    }

    /// Flat field keys of `base_field` for every language, in list order.
    pub fn field_keys(&self, base_field: &str) -> Vec<String> {
        self.keyed(base_field).map(|(_, _, key)| key).collect()
    }
}

impl TryFrom<Vec<String>> for LanguageList {
    type Error = I18nError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(codes)
    }
}

impl From<LanguageList> for Vec<String> {
    fn from(list: LanguageList) -> Self {
        list.codes.into_iter().map(String::from).collect()
    }
}

impl fmt::Display for LanguageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.codes.iter().map(LanguageCode::as_str).collect();
        f.write_str(&joined.join(","))
    }
}
