//! Store-configurable entities with per-language content.
//!
//! Payment methods, categories and products all store their translatable
//! text in the flat suffixed convention. `EntityForm` drives the edit
//! session for one of them: seeded from the API record, edited one input at
//! a time, validated, and rendered as the request body.

use crate::form::{FormState, FormValidator, ValidationReport};
use crate::i18n::{
    capitalize_code, compose_key, LanguageCode, LanguageList, LanguageRegistry, TextDirection,
};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    PaymentMethod,
    Category,
    Product,
}

impl EntityKind {
    /// Base fields that carry one value per store language.
    pub fn translatable_fields(&self) -> &'static [&'static str] {
        match self {
            EntityKind::PaymentMethod => &["name", "description"],
            EntityKind::Category => &["name", "description"],
            EntityKind::Product => &["name", "description"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::PaymentMethod => "payment_method",
            EntityKind::Category => "category",
            EntityKind::Product => "product",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "payment_method" => Ok(EntityKind::PaymentMethod),
            "category" => Ok(EntityKind::Category),
            "product" => Ok(EntityKind::Product),
            other => bail!(
                "Unknown entity kind: '{}'. Expected payment_method, category or product",
                other
            ),
        }
    }
}

/// One rendered input of an entity form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormInput {
    pub key: String,
    pub base_field: String,
    pub language: LanguageCode,
    pub label: String,
    pub direction: TextDirection,
    pub required: bool,
    pub value: String,
}

/// Edit session for a single entity.
#[derive(Debug, Clone)]
pub struct EntityForm {
    kind: EntityKind,
    languages: LanguageList,
    state: FormState,
}

impl EntityForm {
    /// Form for a new entity: every input empty.
    pub fn new(kind: EntityKind, languages: LanguageList) -> Self {
        let state = FormState::blank(kind.translatable_fields(), &languages);
        Self {
            kind,
            languages,
            state,
        }
    }

    /// Form for an existing entity, seeded from its API record.
    pub fn from_record(kind: EntityKind, languages: LanguageList, record: &Value) -> Self {
        let state = FormState::initialize(kind.translatable_fields(), &languages, record);
        debug!("Seeded {} form from record", kind);
        Self {
            kind,
            languages,
            state,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn languages(&self) -> &LanguageList {
        &self.languages
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply one input change.
    pub fn edit(&mut self, key: &str, value: impl Into<String>) {
        self.state = self.state.update(key, value);
    }

    /// Inputs in render order: language by language, fields in declared order.
    pub fn inputs(&self) -> Vec<FormInput> {
        let registry = LanguageRegistry::get();
        let mut inputs = Vec::new();

        for (position, code) in self.languages.iter().enumerate() {
            for field in self.kind.translatable_fields() {
                let key = compose_key(field, position, code);
                let value = self.state.get(&key).unwrap_or_default().to_string();
                inputs.push(FormInput {
                    label: format!("{} ({})", capitalize_code(field), registry.display_name(code)),
                    base_field: field.to_string(),
                    language: code.clone(),
                    direction: registry.direction(code.as_str()),
                    required: position == 0,
                    key,
                    value,
                });
            }
        }

        inputs
    }

    pub fn validate(&self) -> ValidationReport {
        FormValidator::validate(&self.state, self.kind.translatable_fields(), &self.languages)
    }

    /// JSON body for the create/update request.
    ///
    /// Fails when a required primary-language field is blank; otherwise
    /// contains only the non-blank, trimmed values.
    pub fn request_body(&self) -> Result<Value> {
        let report = self.validate();
        if report.has_errors() {
            bail!(
                "Cannot submit {}: missing required fields {:?}",
                self.kind,
                report.missing_required
            );
        }

        let body: Map<String, Value> = self
            .state
            .submission_payload()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        info!("Prepared {} request body with {} fields", self.kind, body.len());
        Ok(Value::Object(body))
    }
}
