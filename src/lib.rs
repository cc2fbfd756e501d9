//! Multi-language field conventions and client-side stores for a merchant
//! store management app.
//!
//! Translatable entity fields are stored flat: the primary store language
//! uses the bare field name and every other language appends its capitalized
//! code (`name`, `nameEn`). See [`i18n`] for the naming scheme, [`form`] for
//! edit-session state and [`context`] for the observable preferences.

pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod form;
pub mod i18n;
pub mod session;

pub use error::I18nError;
