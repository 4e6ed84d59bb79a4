//! Form domain errors

use thiserror::Error;

/// Errors raised by form state transitions.
///
/// Validation failures are not errors; they travel through
/// [`ErrorSet`](super::ErrorSet) and are shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A change was addressed to a field the form does not declare
    #[error("unknown form field `{field}`")]
    UnknownField { field: String },
}

impl FormError {
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}
