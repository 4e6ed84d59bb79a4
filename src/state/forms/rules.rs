//! Validation rule sets for the two forms

use super::values::{ErrorSet, FieldSet};
use regex::Regex;
use std::sync::LazyLock;

/// `something@something.something`, no whitespace anywhere
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex")
});

/// Exact number of characters of a CPF typed without punctuation
pub const CPF_LENGTH: usize = 11;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Length in `char`s. A browser's `String.length` counts UTF-16 units
/// instead, so characters outside the BMP (emoji) count once here and
/// twice there.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Rule set for the residence form (`nome`, `endereco`, `bairro`, `cidade`).
pub fn validate_residence(values: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if is_blank(values.value("nome")) {
        errors.insert("nome", "Nome é obrigatório");
    }
    if char_len(values.value("endereco")) < 5 {
        errors.insert("endereco", "Endereço deve ter pelo menos 5 caracteres");
    }
    if char_len(values.value("bairro")) < 3 {
        errors.insert("bairro", "Bairro deve ter pelo menos 3 caracteres");
    }
    if is_blank(values.value("cidade")) {
        errors.insert("cidade", "Cidade é obrigatório");
    }

    errors
}

/// Rule set for the profile form (`grauescolar`, `email`, `cpf`, `sobrevoce`).
///
/// Education level and the free-text field are not checked.
pub fn validate_profile(values: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::new();

    let email = values.value("email");
    if email.is_empty() {
        errors.insert("email", "Email é obrigatório");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert("email", "Email inválido");
    }

    if char_len(values.value("cpf")) != CPF_LENGTH {
        errors.insert("cpf", format!("CPF deve ter {CPF_LENGTH} caracteres"));
    }

    errors
}
