use crate::i18n::{FieldSource, LanguageList};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Form values keyed by flat field key (`name`, `nameEn`, ...).
///
/// A state built by [`FormState::blank`] or [`FormState::initialize`] holds
/// exactly one key per (store language, base field) pair, so every input a
/// form renders has a defined value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    /// A state with every key present and empty.
    pub fn blank<F>(base_fields: &[F], languages: &LanguageList) -> Self
    where
        F: AsRef<str>,
    {
        Self::initialize(base_fields, languages, &BTreeMap::<String, String>::new())
    }

    /// Build the state for `base_fields` across all store languages.
    ///
    /// Each key takes its value from `seed` when present (typically the entity
    /// record returned by the API), otherwise an empty string. Seed keys that
    /// do not belong to the form are dropped.
    pub fn initialize<F, S>(base_fields: &[F], languages: &LanguageList, seed: &S) -> Self
    where
        F: AsRef<str>,
        S: FieldSource + ?Sized,
    {
        let mut values = BTreeMap::new();

        for field in base_fields {
            for (_, _, key) in languages.keyed(field.as_ref()) {
                let value = seed.field(&key).unwrap_or_default().to_string();
                values.insert(key, value);
            }
        }

        debug!(
            "Initialized form state with {} keys for languages {}",
            values.len(),
            languages
        );

        Self { values }
    }

    pub(crate) fn from_values(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return a new state with `key` set to `value`; `self` is left untouched.
    ///
    /// Keys that are not part of the form are ignored so the state keeps
    /// exactly the keys it was initialized with.
    pub fn update(&self, key: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();

        match next.values.get_mut(key) {
            Some(slot) => *slot = value.into(),
            None => warn!("Ignoring update to unknown form field '{}'", key),
        }

        next
    }

    /// The request body fields for a create/update call.
    ///
    /// Values are trimmed and keys whose trimmed value is empty are omitted,
    /// so blank optional translations never overwrite server-side values.
    pub fn submission_payload(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .filter_map(|(key, value)| {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| (key.clone(), trimmed.to_string()))
            })
            .collect()
    }
}

impl FieldSource for FormState {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn ar_en() -> LanguageList {
        LanguageList::parse("ar,en").unwrap()
    }

    fn seed(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== initialize Tests ====================

    #[test]
    fn test_blank_has_all_keys() {
        let state = FormState::blank(&["name", "description"], &ar_en());

        assert_eq!(state.len(), 4);
        for key in ["name", "nameEn", "description", "descriptionEn"] {
            assert_eq!(state.get(key), Some(""), "{}", key);
        }
    }

    #[test]
    fn test_initialize_from_seed() {
        let state = FormState::initialize(
            &["name"],
            &ar_en(),
            &seed(&[("name", "متجر"), ("nameEn", "Store")]),
        );

        assert_eq!(state.get("name"), Some("متجر"));
        assert_eq!(state.get("nameEn"), Some("Store"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_initialize_drops_foreign_seed_keys() {
        let state = FormState::initialize(
            &["name"],
            &ar_en(),
            &seed(&[("name", "متجر"), ("price", "10"), ("nameFr", "Magasin")]),
        );

        assert!(!state.contains_key("price"));
        assert!(!state.contains_key("nameFr"));
        assert_eq!(state.get("nameEn"), Some(""));
    }

    #[test]
    fn test_initialize_duplicate_fields_counted_once() {
        let state = FormState::blank(&["name", "name"], &ar_en());
        assert_eq!(state.len(), 2);
    }

    // ==================== update Tests ====================

    #[test]
    fn test_update_returns_new_state() {
        let original = FormState::blank(&["name"], &ar_en());
        let updated = original.update("nameEn", "Store");

        assert_eq!(updated.get("nameEn"), Some("Store"));
        assert_eq!(original.get("nameEn"), Some(""));
        assert_ne!(original, updated);
    }

    #[test]
    fn test_update_unknown_key_is_ignored() {
        let original = FormState::blank(&["name"], &ar_en());
        let updated = original.update("price", "10");

        assert_eq!(original, updated);
        assert_eq!(updated.len(), 2);
    }

    // ==================== submission_payload Tests ====================

    #[test]
    fn test_payload_trims_and_omits_blank() {
        let state = FormState::blank(&["name", "description"], &ar_en())
            .update("name", "  متجر ")
            .update("nameEn", "   ")
            .update("description", "\tوصف\n");

        let payload = state.submission_payload();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload["name"], "متجر");
        assert_eq!(payload["description"], "وصف");
        assert!(!payload.contains_key("nameEn"));
        assert!(!payload.contains_key("descriptionEn"));
    }

    #[test]
    fn test_payload_of_blank_state_is_empty() {
        let state = FormState::blank(&["name"], &ar_en());
        assert!(state.submission_payload().is_empty());
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_flat_object() {
        let state = FormState::blank(&["name"], &ar_en()).update("name", "متجر");
        let json = serde_json::to_value(&state).expect("Should serialize");

        assert_eq!(json, serde_json::json!({"name": "متجر", "nameEn": ""}));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_initialize_key_count(
            fields in proptest::collection::btree_set("[a-z]{1,8}", 1..5),
            codes in proptest::collection::btree_set("[a-z]{2}", 1..4),
        ) {
            let languages = LanguageList::new(&codes).unwrap();
            let fields: Vec<String> = fields.into_iter().collect();
            let state = FormState::blank(&fields, &languages);

            prop_assert_eq!(state.len(), languages.len() * fields.len());
            for field in &fields {
                for key in languages.field_keys(field) {
                    prop_assert_eq!(state.get(&key), Some(""));
                }
            }
        }

        #[test]
        fn prop_payload_has_no_blank_values(
            values in proptest::collection::vec("[ \t\na-z]{0,6}", 4),
        ) {
            let fields = ["name", "description"];
            let mut state = FormState::blank(&fields, &ar_en());
            let keys: Vec<String> = state.keys().map(str::to_string).collect();
            for (key, value) in keys.iter().zip(values.iter()) {
                state = state.update(key, value.clone());
            }

            for (key, value) in state.submission_payload() {
                prop_assert!(!value.is_empty());
                prop_assert_eq!(value.as_str(), value.trim());
                prop_assert!(!state.get(&key).unwrap().trim().is_empty());
            }
        }
    }
}
