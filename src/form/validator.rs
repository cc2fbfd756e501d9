//! Form validation.
//!
//! Only the primary language is mandatory. Secondary-language fields never
//! fail validation; a blank translation next to a filled primary value is
//! reported as a warning so the UI can hint that content is untranslated.

use crate::form::FormState;
use crate::i18n::{FieldSource, LanguageList};

/// Base fields whose primary-language value is empty or whitespace-only.
///
/// Returned in the order of `base_fields`.
pub fn missing_required<S, F>(state: &S, base_fields: &[F], languages: &LanguageList) -> Vec<String>
where
    S: FieldSource + ?Sized,
    F: AsRef<str>,
{
    base_fields
        .iter()
        .filter_map(|field| {
            let field: &str = field.as_ref();
            let key = languages.primary_key(field);
            let blank = state
                .field(&key)
                .map(|value| value.trim().is_empty())
                .unwrap_or(true);
            blank.then(|| field.to_string())
        })
        .collect()
}

/// True when every base field has a non-blank primary-language value.
pub fn validate_required<S, F>(state: &S, base_fields: &[F], languages: &LanguageList) -> bool
where
    S: FieldSource + ?Sized,
    F: AsRef<str>,
{
    missing_required(state, base_fields, languages).is_empty()
}

/// Validation report for a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Required base fields missing in the primary language
    pub missing_required: Vec<String>,

    /// Critical errors that block submission
    pub errors: Vec<String>,

    /// Non-critical warnings (untranslated secondary fields)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            missing_required: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for multi-language forms.
pub struct FormValidator;

impl FormValidator {
    /// Validate a form state.
    ///
    /// # Arguments
    /// * `state` - The form being edited
    /// * `base_fields` - Fields required in the primary language
    /// * `languages` - Store languages, primary first
    pub fn validate<F>(state: &FormState, base_fields: &[F], languages: &LanguageList) -> ValidationReport
    where
        F: AsRef<str>,
    {
        let mut report = ValidationReport::new();

        report.missing_required = missing_required(state, base_fields, languages);
        for field in &report.missing_required {
            report.errors.push(format!(
                "Field '{}' is required in {}",
                field,
                languages.primary()
            ));
        }

        for field in base_fields {
            let field: &str = field.as_ref();
            if report.missing_required.iter().any(|missing| missing == field) {
                continue;
            }

            for (_, code, key) in languages.keyed(field).skip(1) {
                let blank = state
                    .get(&key)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true);
                if blank {
                    report.warnings.push(format!(
                        "Field '{}' has no {} translation ('{}')",
                        field, code, key
                    ));
                }
            }
        }

        report
    }
}
