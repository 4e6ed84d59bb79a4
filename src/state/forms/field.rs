//! Form field descriptors

/// Describes one input of a form: the key it writes to and its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    /// Whether validation messages are ever reported for this field
    pub is_validated: bool,
}

impl FormField {
    /// Create a field whose value is checked on submit
    pub const fn validated(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            is_validated: true,
        }
    }

    /// Create a free-text field that is never validated
    pub const fn free(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            is_validated: false,
        }
    }
}
