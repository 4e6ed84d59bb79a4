//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field's input box
pub const INPUT_HEIGHT: u16 = 3;

/// Rows a field needs: the input box plus, for validated fields, one line
/// reserved for its error message
pub fn field_height(field: &FormField) -> u16 {
    if field.is_validated {
        INPUT_HEIGHT + 1
    } else {
        INPUT_HEIGHT
    }
}

/// Draw a labeled input with its current value and, below it, the field's
/// error message if there is one.
///
/// A value wider than the box scrolls horizontally while its field is
/// active so the tail and the cursor stay visible.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
        .split(area);

    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = if is_active { "▌" } else { "" };

    let line = Line::from(vec![
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]);
    let inner_width = usize::from(chunks[0].width.saturating_sub(2));
    let offset = if is_active {
        u16::try_from(line.width().saturating_sub(inner_width)).unwrap_or(u16::MAX)
    } else {
        0
    };

    let input = Paragraph::new(line).scroll((0, offset)).block(
        Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, chunks[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}
