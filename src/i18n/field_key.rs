//! Flat field keys: synthesizing `nameEn` from (position, "name", "en") and back.

use crate::error::I18nError;
use crate::i18n::language::{LanguageCode, LanguageList};

/// Uppercase the first character of a language code, leaving the rest as is.
///
/// `"ar"` becomes `"Ar"`; multi-part codes are not titlecased.
pub fn capitalize_code(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join a base field and a validated code at a known position.
pub(crate) fn compose_key(base_field: &str, position: usize, code: &LanguageCode) -> String {
    if position == 0 {
        base_field.to_string()
    } else {
        format!("{}{}", base_field, code.capitalized())
    }
}

/// Resolve the flat field key for a base field in the language at `position`.
///
/// # Arguments
/// * `position` - Position of the language in the store language list
/// * `base_field` - Logical field name without suffix (e.g. "name")
/// * `language_code` - Code of the language at that position (e.g. "en")
///
/// # Returns
/// * `Ok(base_field)` for the primary language (position 0), whatever the code
/// * `Ok(base_field + Capitalized(code))` for secondary languages
/// * `Err(I18nError::InvalidLanguageCode)` for a secondary language whose code
///   is empty or not purely alphabetic
pub fn resolve_field_key(
    position: usize,
    base_field: &str,
    language_code: &str,
) -> Result<String, I18nError> {
    if position == 0 {
        return Ok(base_field.to_string());
    }

    let code = LanguageCode::new(language_code)?;
    Ok(compose_key(base_field, position, &code))
}

/// A field key in typed form: the base field plus the language position.
///
/// Produced by [`parse_field_key`]; [`FieldKey::to_key`] renders it back and
/// rejects positions the store languages do not have.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey {
    pub base: String,
    pub position: usize,
}

impl FieldKey {
    pub fn new(base: impl Into<String>, position: usize) -> Self {
        Self {
            base: base.into(),
            position,
        }
    }

    pub fn primary(base: impl Into<String>) -> Self {
        Self::new(base, 0)
    }

    pub fn is_primary(&self) -> bool {
        self.position == 0
    }

    /// Render the flat key for the given store languages.
    pub fn to_key(&self, languages: &LanguageList) -> Result<String, I18nError> {
        languages.field_key(self.position, &self.base)
    }
}

/// Split a flat key back into its base field and language position.
///
/// A key is secondary when it ends with the capitalized code of a configured
/// secondary language and something is left in front of the suffix. When
/// several suffixes match, the longest one wins. Anything else is a primary
/// key whose base is the whole key.
pub fn parse_field_key(key: &str, languages: &LanguageList) -> FieldKey {
    let mut best: Option<FieldKey> = None;

    for (offset, code) in languages.secondary().iter().enumerate() {
        let suffix = code.capitalized();
        let Some(base) = key.strip_suffix(suffix.as_str()) else {
            continue;
        };
        if base.is_empty() {
            continue;
        }

        let longer = best
            .as_ref()
            .map(|current| base.len() < current.base.len())
            .unwrap_or(true);
        if longer {
            best = Some(FieldKey::new(base, offset + 1));
        }
    }

    best.unwrap_or_else(|| FieldKey::primary(key))
}
