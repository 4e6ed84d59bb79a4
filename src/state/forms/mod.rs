//! Form domain layer
//!
//! This module provides the form controller and the two built-in forms:
//! - `values`: field values and validation messages keyed by field name
//! - `controller`: change/submit transitions and submission history
//! - `rules`: validation rule sets
//! - `form_state`: keyboard cursor and the built-in form panels

mod controller;
mod error;
mod field;
mod form_state;
mod rules;
mod validation;
mod values;

pub use controller::SubmitOutcome;
pub use field::FormField;
pub use form_state::{profile_form, residence_form, Form, FormPanel};
pub use values::FieldSet;
