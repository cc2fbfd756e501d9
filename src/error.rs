use thiserror::Error;

/// Configuration errors raised by the multi-language field logic.
///
/// Validation failures on form content are never reported through this type;
/// they surface as [`crate::form::ValidationReport`] values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("store language list is empty")]
    EmptyLanguageList,

    #[error("invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    #[error("language '{0}' is configured more than once")]
    DuplicateLanguage(String),

    #[error("language '{0}' is not one of the store languages")]
    UnknownLanguage(String),

    #[error("language position {position} is out of range for {languages} store languages")]
    PositionOutOfRange { position: usize, languages: usize },
}
