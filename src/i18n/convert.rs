//! Converters between the flat suffixed shape and a nested per-language map.

use crate::form::FormState;
use crate::i18n::language::{LanguageCode, LanguageList};
use crate::i18n::reader::FieldSource;
use std::collections::BTreeMap;

/// Language code -> (base field -> value).
pub type TranslationMap = BTreeMap<String, BTreeMap<String, String>>;

/// Per-language record for a store language.
///
/// An exact key wins; otherwise language codes compare case-insensitively,
/// like everywhere else store languages are looked up.
fn record_for<'a>(
    translations: &'a TranslationMap,
    code: &LanguageCode,
) -> Option<&'a BTreeMap<String, String>> {
    translations.get(code.as_str()).or_else(|| {
        translations
            .iter()
            .find(|(language, _)| code.matches(language))
            .map(|(_, record)| record)
    })
}

/// Flatten a per-language map into suffixed form keys.
///
/// Every (language, field) pair produces a key; values missing from
/// `translations` become empty strings.
pub fn flatten_translations<F>(
    translations: &TranslationMap,
    languages: &LanguageList,
    fields: &[F],
) -> FormState
where
    F: AsRef<str>,
{
    let mut values = BTreeMap::new();

    for field in fields {
        let field: &str = field.as_ref();
        for (_, code, key) in languages.keyed(field) {
            let value = record_for(translations, code)
                .and_then(|record| record.get(field))
                .cloned()
                .unwrap_or_default();
            values.insert(key, value);
        }
    }

    FormState::from_values(values)
}

/// Rebuild the per-language map from a flat record.
///
/// Every configured language gets an entry with every field; keys missing
/// from the record become empty strings.
pub fn unflatten<S, F>(state: &S, languages: &LanguageList, fields: &[F]) -> TranslationMap
where
    S: FieldSource + ?Sized,
    F: AsRef<str>,
{
    let mut translations: TranslationMap = languages
        .iter()
        .map(|code| (code.as_str().to_string(), BTreeMap::new()))
        .collect();

    for field in fields {
        let field: &str = field.as_ref();
        for (_, code, key) in languages.keyed(field) {
            let value = state.field(&key).unwrap_or_default().to_string();
            translations
                .entry(code.as_str().to_string())
                .or_default()
                .insert(field.to_string(), value);
        }
    }

    translations
}
