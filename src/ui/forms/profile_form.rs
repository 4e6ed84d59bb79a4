//! Formulário 2 rendering

use super::form_view::draw_form;
use crate::state::{FieldSet, FormPanel};
use ratatui::{layout::Rect, Frame};

/// Draw Formulário 2
pub fn draw(frame: &mut Frame, area: Rect, panel: &FormPanel, is_focused: bool) {
    draw_form(frame, area, panel, is_focused, entry_lines);
}

fn entry_lines(entry: &FieldSet) -> Vec<String> {
    vec![
        format!("Grau escolar: {}", entry.value("grauescolar")),
        format!("E-mail: {}", entry.value("email")),
        format!("CPF: {}", entry.value("cpf")),
        format!("Sobre você: {}", entry.value("sobrevoce")),
    ]
}
