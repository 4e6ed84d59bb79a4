//! Formulário 1 rendering

use super::form_view::draw_form;
use crate::state::{FieldSet, FormPanel};
use ratatui::{layout::Rect, Frame};

/// Draw Formulário 1
pub fn draw(frame: &mut Frame, area: Rect, panel: &FormPanel, is_focused: bool) {
    draw_form(frame, area, panel, is_focused, entry_lines);
}

/// Listed fields of one submission
fn entry_lines(entry: &FieldSet) -> Vec<String> {
    vec![
        format!("Nome: {}", entry.value("nome")),
        format!("Endereço: {}", entry.value("endereco")),
        format!(
            "Bairro: {} - Cidade: {}",
            entry.value("bairro"),
            entry.value("cidade")
        ),
    ]
}
