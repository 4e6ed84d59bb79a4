//! Form controller: field values, validation errors and submission history

use super::error::FormError;
use super::validation::Validate;
use super::values::{ErrorSet, FieldSet};

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values passed validation and were appended at `index`
    Accepted { index: usize },
    /// Validation reported `errors` fields; nothing was recorded
    Rejected { errors: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Owns the state of one form and applies change/submit transitions.
///
/// Each transition computes the next `FieldSet` or `ErrorSet` and replaces
/// the stored one. Controllers never share state with each other.
#[derive(Debug, Clone)]
pub struct FormController<V> {
    name: String,
    initial_values: FieldSet,
    validator: V,
    values: FieldSet,
    errors: ErrorSet,
    submissions: Vec<FieldSet>,
}

impl<V: Validate> FormController<V> {
    pub fn new(initial_values: FieldSet, validator: V) -> Self {
        Self {
            name: String::from("form"),
            values: initial_values.clone(),
            initial_values,
            validator,
            errors: ErrorSet::default(),
            submissions: Vec::new(),
        }
    }

    /// Set the name used to tag log events from this controller
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the value of `field` and drop its stale error message.
    ///
    /// No validation runs here; other fields' errors are left alone.
    pub fn on_field_change(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let values = self.values.with_value(field, value).inspect_err(|err| {
            tracing::warn!(form = %self.name, "Rejected change: {err}");
        })?;
        self.values = values;

        if self.errors.has_error(field) {
            self.errors = self.errors.cleared(field);
        }

        tracing::debug!(form = %self.name, field, "Field changed");
        Ok(())
    }

    /// Validate the current values and record them if they pass.
    ///
    /// On success a snapshot is appended to the submission list and the
    /// values are reset to the initial ones. On failure only the error set
    /// is replaced. Messages for fields the form does not declare are
    /// dropped before the outcome is decided.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let reported = self.validator.validate(&self.values);
        let errors = reported.restricted_to(&self.values);
        if errors != reported {
            tracing::warn!(form = %self.name, "Validator reported undeclared fields");
        }

        if errors.is_empty() {
            let snapshot = std::mem::replace(&mut self.values, self.initial_values.clone());
            self.submissions.push(snapshot);
            let index = self.submissions.len() - 1;
            tracing::info!(form = %self.name, index, "Submission accepted");
            SubmitOutcome::Accepted { index }
        } else {
            let count = errors.count();
            self.errors = errors;
            tracing::debug!(form = %self.name, errors = count, "Submission rejected");
            SubmitOutcome::Rejected { errors: count }
        }
    }
}

impl<V> FormController<V> {
    #[allow(dead_code)]
    pub fn values(&self) -> &FieldSet {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.value(field)
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Accepted submissions, oldest first
    pub fn submissions(&self) -> &[FieldSet] {
        &self.submissions
    }

    #[allow(dead_code)]
    pub fn initial_values(&self) -> &FieldSet {
        &self.initial_values
    }
}
