//! Internationalization (i18n) module for store-configurable content.
//!
//! Entities such as payment methods, categories and products carry one value
//! per store language in a flat record. The primary language (position 0 of
//! the store's language list) uses the bare field name, every other language
//! appends its capitalized code: `name`, `nameEn`, `descriptionAr`.
//!
//! # Architecture
//!
//! - `language`: Validated `LanguageCode` and the ordered `LanguageList`
//! - `registry`: Metadata (names, text direction) for known languages
//! - `field_key`: Synthesizing and parsing flat field keys
//! - `reader`: Reading a localized value with fallback to the primary language
//! - `convert`: Flat suffixed records <-> nested per-language maps
//!
//! # Example
//!
//! ```rust
//! use store_i18n::i18n::{translated_value, LanguageList};
//! use std::collections::HashMap;
//!
//! let languages = LanguageList::parse("ar,en").unwrap();
//! assert_eq!(languages.field_key(1, "name").unwrap(), "nameEn");
//! assert!(languages.field_key(2, "name").is_err());
//!
//! let record = HashMap::from([("name".to_string(), "متجر".to_string())]);
//! assert_eq!(translated_value(&record, "name", &languages, "en"), "متجر");
//! ```

mod convert;
mod field_key;
mod language;
mod reader;
mod registry;

pub use convert::{flatten_translations, unflatten, TranslationMap};
pub(crate) use field_key::compose_key;
pub use field_key::{capitalize_code, parse_field_key, resolve_field_key, FieldKey};
pub use language::{LanguageCode, LanguageList};
pub use reader::{translated_value, FieldSource};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
