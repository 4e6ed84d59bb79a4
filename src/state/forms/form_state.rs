//! Keyboard-driven form panels and the two built-in forms

use super::controller::{FormController, SubmitOutcome};
use super::error::FormError;
use super::field::FormField;
use super::rules::{validate_profile, validate_residence};
use super::validation::{RuleSet, Validate};
use super::values::FieldSet;

/// Trait for common form cursor operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// A form as shown on screen: its fields, its controller and the cursor.
///
/// The cursor has one slot per field followed by the submit button slot.
#[derive(Debug, Clone)]
pub struct FormPanel<V = RuleSet> {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub list_title: &'static str,
    pub fields: Vec<FormField>,
    pub controller: FormController<V>,
    pub active_field_index: usize,
}

impl<V: Validate> FormPanel<V> {
    /// Create a panel whose fields all start empty
    pub fn new(
        title: &'static str,
        submit_label: &'static str,
        list_title: &'static str,
        fields: Vec<FormField>,
        validator: V,
    ) -> Self {
        let initial = FieldSet::blank(fields.iter().map(|f| f.name));
        Self {
            title,
            submit_label,
            list_title,
            fields,
            controller: FormController::new(initial, validator).named(title),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button is currently active
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Field under the cursor, `None` on the button slot
    pub fn active_form_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Append a character to the active field
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        let Some(field) = self.active_form_field() else {
            return Ok(());
        };
        let name = field.name;
        let mut value = self.controller.value(name).to_string();
        value.push(c);
        self.controller.on_field_change(name, &value)
    }

    /// Remove the last character of the active field
    pub fn backspace(&mut self) -> Result<(), FormError> {
        let Some(field) = self.active_form_field() else {
            return Ok(());
        };
        let name = field.name;
        let mut value = self.controller.value(name).to_string();
        if value.pop().is_none() {
            return Ok(());
        }
        self.controller.on_field_change(name, &value)
    }

    /// Submit the form; an accepted submission puts the cursor back on the
    /// first field
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.controller.on_submit();
        if outcome.is_accepted() {
            self.active_field_index = 0;
        }
        outcome
    }
}

impl<V> Form for FormPanel<V> {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields, then the submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

/// Formulário 1: name and address
pub fn residence_form() -> FormPanel {
    FormPanel::new(
        "Formulário 1",
        "Enviar Formulário 1",
        "Lista do Formulário 1",
        vec![
            FormField::validated("nome", "Nome"),
            FormField::validated("endereco", "Endereço"),
            FormField::validated("bairro", "Bairro"),
            FormField::validated("cidade", "Cidade"),
        ],
        validate_residence as RuleSet,
    )
}

/// Formulário 2: education, contact and personal details
pub fn profile_form() -> FormPanel {
    FormPanel::new(
        "Formulário 2",
        "Enviar Formulário 2",
        "Lista do Formulário 2",
        vec![
            FormField::free("grauescolar", "Grau escolar"),
            FormField::validated("email", "E-mail"),
            FormField::validated("cpf", "CPF (sem pontos)"),
            FormField::free("sobrevoce", "Fale sobre você"),
        ],
        validate_profile as RuleSet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_text(panel: &mut FormPanel, text: &str) {
        for c in text.chars() {
            panel.input_char(c).unwrap();
        }
    }

    mod cursor {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_first_field() {
            let panel = residence_form();
            assert_eq!(panel.active_field_index, 0);
            assert_eq!(panel.active_form_field().unwrap().name, "nome");
        }

        #[test]
        fn test_next_field_reaches_button_then_wraps() {
            let mut panel = residence_form();
            for _ in 0..4 {
                panel.next_field();
            }
            assert!(panel.is_button_active());
            assert!(panel.active_form_field().is_none());
            panel.next_field();
            assert_eq!(panel.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_from_first_goes_to_button() {
            let mut panel = profile_form();
            panel.prev_field();
            assert!(panel.is_button_active());
        }

        #[test]
        fn test_set_active_field_is_clamped() {
            let mut panel = profile_form();
            panel.set_active_field(99);
            assert_eq!(panel.active_field_index, 4);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_writes_active_field() {
            let mut panel = residence_form();
            panel.next_field();
            type_text(&mut panel, "Rua A");
            assert_eq!(panel.controller.value("endereco"), "Rua A");
            assert_eq!(panel.controller.value("nome"), "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut panel = residence_form();
            type_text(&mut panel, "Anaé");
            panel.backspace().unwrap();
            assert_eq!(panel.controller.value("nome"), "Ana");
        }

        #[test]
        fn test_backspace_on_empty_field_keeps_error() {
            let mut panel = residence_form();
            panel.submit();
            panel.backspace().unwrap();
            assert!(panel.controller.error("nome").is_some());
        }

        #[test]
        fn test_typing_on_button_slot_is_ignored() {
            let mut panel = profile_form();
            panel.set_active_field(4);
            panel.input_char('x').unwrap();
            for field in &panel.fields {
                assert_eq!(panel.controller.value(field.name), "");
            }
        }

        #[test]
        fn test_typing_clears_field_error() {
            let mut panel = profile_form();
            panel.submit();
            assert!(panel.controller.error("email").is_some());
            panel.next_field();
            panel.input_char('a').unwrap();
            assert!(panel.controller.error("email").is_none());
            assert!(panel.controller.error("cpf").is_some());
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepted_submit_resets_cursor() {
            let mut panel = profile_form();
            panel.set_active_field(1);
            type_text(&mut panel, "ana@example.com");
            panel.next_field();
            type_text(&mut panel, "12345678901");
            panel.set_active_field(4);

            let outcome = panel.submit();

            assert_eq!(outcome, SubmitOutcome::Accepted { index: 0 });
            assert_eq!(panel.active_field_index, 0);
            assert_eq!(panel.controller.value("email"), "");
        }

        #[test]
        fn test_rejected_submit_keeps_cursor() {
            let mut panel = residence_form();
            panel.set_active_field(4);
            let outcome = panel.submit();
            assert_eq!(outcome, SubmitOutcome::Rejected { errors: 4 });
            assert!(panel.is_button_active());
        }
    }

    #[test]
    fn test_builtin_forms_declare_expected_fields() {
        let residence: Vec<_> = residence_form().fields.iter().map(|f| f.name).collect();
        let profile: Vec<_> = profile_form().fields.iter().map(|f| f.name).collect();
        assert_eq!(residence, vec!["nome", "endereco", "bairro", "cidade"]);
        assert_eq!(profile, vec!["grauescolar", "email", "cpf", "sobrevoce"]);
        assert_eq!(
            residence_form().controller.initial_values(),
            &FieldSet::blank(["nome", "endereco", "bairro", "cidade"])
        );
    }
}
