//! Field values and validation messages keyed by field name

use super::error::FormError;
use indexmap::IndexMap;

/// Current values of all fields of a form.
///
/// The key set is fixed when the set is built: changes can only replace the
/// value of a declared field, never add or remove one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: IndexMap<String, String>,
}

impl FieldSet {
    /// Build a field set from `(name, value)` pairs
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a field set where every named field starts empty
    pub fn blank<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(names.into_iter().map(|name| (name, "")))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value of `name`, or `""` when the field is not declared
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Return a copy of this set with `name` replaced by `value`.
    pub fn with_value(&self, name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        if !self.contains(name) {
            return Err(FormError::unknown_field(name));
        }
        let mut next = self.clone();
        next.values.insert(name.to_string(), value.into());
        Ok(next)
    }
}

/// Validation messages keyed by field name.
///
/// An entry holding an empty message counts as "no error"; clearing a field
/// keeps its key with an empty message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    messages: IndexMap<String, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`, replacing any previous message
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(field.into(), message.into());
    }

    /// Message for `field`, `None` when the field has no error
    pub fn get(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// True when no field carries a message
    pub fn is_empty(&self) -> bool {
        self.messages.values().all(String::is_empty)
    }

    /// Number of fields carrying a message
    pub fn count(&self) -> usize {
        self.messages.values().filter(|m| !m.is_empty()).count()
    }

    /// Return a copy of this set with the message of `field` emptied.
    pub fn cleared(&self, field: &str) -> Self {
        let mut next = self.clone();
        if let Some(message) = next.messages.get_mut(field) {
            message.clear();
        }
        next
    }

    /// Return a copy keeping only messages for fields declared in `values`
    pub fn restricted_to(&self, values: &FieldSet) -> Self {
        Self {
            messages: self
                .messages
                .iter()
                .filter(|(field, _)| values.contains(field))
                .map(|(k, m)| (k.clone(), m.clone()))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
