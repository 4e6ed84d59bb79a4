//! Layout components (form regions, status bar)

use crate::app::App;
use crate::config::FormSlot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints shown on the right of the status bar
const KEY_HINTS: &str = " F1/F2:formulário  Tab:campo  Enter/^S:enviar  Esc:sair ";

/// Split the screen into the two form regions and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Forms
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let focused = match app.state.active_form {
        FormSlot::Form1 => " [1] ",
        FormSlot::Form2 => " [2] ",
    };
    spans.push(Span::styled(focused, Style::default().fg(Color::Cyan)));

    if let Some(msg) = &app.state.status_message {
        let color = match app.state.last_outcome {
            Some(outcome) if outcome.is_accepted() => Color::Green,
            _ => Color::Red,
        };
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    if !app.state.show_help {
        return;
    }

    // Key hints on the right
    let hint_width = (KEY_HINTS.chars().count() as u16).min(area.width);
    let hint_area = Rect {
        x: area.x + area.width.saturating_sub(hint_width),
        y: area.y,
        width: hint_width,
        height: 1,
    };
    let hints =
        Paragraph::new(KEY_HINTS).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(hints, hint_area);
}
