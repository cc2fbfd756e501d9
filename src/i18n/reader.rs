//! Reading localized values from flat entity records.

use crate::i18n::language::LanguageList;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// A flat record that can be read by field key.
///
/// Implemented for the map shapes entity records arrive in: plain string
/// maps, maps with optional values, and JSON objects from the store API.
/// A key that is absent, `None`, or (for JSON) not a string reads as `None`.
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for HashMap<String, Option<String>> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.as_deref())
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, Option<String>> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|value| value.as_deref())
    }
}

impl FieldSource for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl FieldSource for Value {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Read `base_field` of an entity in the display language.
///
/// The primary language (or a language the store does not publish in) reads
/// the bare field. A secondary language reads its suffixed field and falls
/// back to the primary value when that is missing or empty. Always returns a
/// string, empty when nothing is available.
pub fn translated_value<S>(
    entity: &S,
    base_field: &str,
    languages: &LanguageList,
    current_language: &str,
) -> String
where
    S: FieldSource + ?Sized,
{
    let primary = || entity.field(base_field).unwrap_or_default().to_string();

    let position = match languages.position(current_language) {
        Some(position) if position > 0 => position,
        _ => return primary(),
    };

    let Ok(key) = languages.field_key(position, base_field) else {
        return primary();
    };
    match entity.field(&key) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            trace!(
                "No '{}' value for {}, falling back to primary language",
                key,
                current_language
            );
            primary()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ar_en() -> LanguageList {
        LanguageList::parse("ar,en").unwrap()
    }

    fn record(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== Primary Language Tests ====================

    #[test]
    fn test_primary_language_reads_base_field() {
        let entity = record(&[("name", "متجر"), ("nameEn", "Store")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "ar"), "متجر");
    }

    #[test]
    fn test_primary_language_missing_is_empty() {
        let entity = record(&[("nameEn", "Store")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "ar"), "");
    }

    #[test]
    fn test_unknown_language_reads_base_field() {
        let entity = record(&[("name", "متجر"), ("nameEn", "Store")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "fr"), "متجر");
    }

    // ==================== Secondary Language Tests ====================

    #[test]
    fn test_secondary_language_reads_suffixed_field() {
        let entity = record(&[("name", "متجر"), ("nameEn", "Store")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "en"), "Store");
    }

    #[test]
    fn test_secondary_language_falls_back_when_absent() {
        let entity = record(&[("name", "متجر")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "en"), "متجر");
    }

    #[test]
    fn test_secondary_language_falls_back_when_empty() {
        let entity = record(&[("name", "متجر"), ("nameEn", "")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "en"), "متجر");
    }

    #[test]
    fn test_nothing_available_is_empty() {
        let entity = record(&[]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "en"), "");
    }

    #[test]
    fn test_current_language_case_insensitive() {
        let entity = record(&[("name", "متجر"), ("nameEn", "Store")]);
        assert_eq!(translated_value(&entity, "name", &ar_en(), "EN"), "Store");
    }

    // ==================== FieldSource Tests ====================

    #[test]
    fn test_optional_values() {
        let entity: HashMap<String, Option<String>> = HashMap::from([
            ("description".to_string(), Some("وصف".to_string())),
            ("descriptionEn".to_string(), None),
        ]);
        assert_eq!(
            translated_value(&entity, "description", &ar_en(), "en"),
            "وصف"
        );
    }

    #[test]
    fn test_json_record() {
        let entity = json!({
            "id": 42,
            "name": "Cash on delivery",
            "nameAr": "الدفع عند الاستلام",
            "description": null
        });
        let languages = LanguageList::parse("en,ar").unwrap();

        assert_eq!(
            translated_value(&entity, "name", &languages, "ar"),
            "الدفع عند الاستلام"
        );
        assert_eq!(translated_value(&entity, "description", &languages, "ar"), "");
        assert_eq!(entity.field("id"), None);
    }
}
