//! Flat, multi-language form state for entities being created or edited.
//!
//! - `state`: The `FormState` mapping and its pure update/payload operations
//! - `validator`: Required-field checks on the primary language

mod state;
mod validator;

pub use state::FormState;
pub use validator::{missing_required, validate_required, FormValidator, ValidationReport};
