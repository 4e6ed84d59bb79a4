//! Validator abstraction for form controllers

use super::values::{ErrorSet, FieldSet};

/// Computes validation messages for a set of field values.
///
/// Implementations must be pure: the same values always produce the same
/// messages. An empty result means the values are acceptable.
#[cfg_attr(test, mockall::automock)]
pub trait Validate {
    fn validate(&self, values: &FieldSet) -> ErrorSet;
}

impl<F> Validate for F
where
    F: Fn(&FieldSet) -> ErrorSet,
{
    fn validate(&self, values: &FieldSet) -> ErrorSet {
        self(values)
    }
}

/// Plain rule set function, the validator type used by the built-in forms
pub type RuleSet = fn(&FieldSet) -> ErrorSet;
