//! Shared form layout: inputs, submit button and submission list

use super::field_renderer::{draw_field, field_height};
use crate::state::{FieldSet, FormPanel};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Line closing every entry of a submission list
pub const ENTRY_SEPARATOR: &str = ". . . . . . .";

/// Lines describing one past submission
pub type EntrySummary = fn(&FieldSet) -> Vec<String>;

/// Draw a whole form bound to `panel`'s controller.
///
/// `summary` selects which fields of each past submission are listed.
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    panel: &FormPanel,
    is_focused: bool,
    summary: EntrySummary,
) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {} ", panel.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = panel
        .fields
        .iter()
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0)); // Submission list

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let controller = &panel.controller;
    for (index, field) in panel.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            field,
            controller.value(field.name),
            controller.error(field.name),
            is_focused && panel.active_field_index == index,
        );
    }

    let button_index = panel.fields.len();
    render_submit_button(
        frame,
        chunks[button_index],
        panel.submit_label,
        is_focused && panel.is_button_active(),
    );

    draw_submissions(frame, chunks[button_index + 1], panel, summary);
}

/// Draw the read-only list of accepted submissions, newest kept in view
fn draw_submissions(frame: &mut Frame, area: Rect, panel: &FormPanel, summary: EntrySummary) {
    let submissions = panel.controller.submissions();

    let items: Vec<ListItem> = submissions
        .iter()
        .map(|entry| {
            let mut lines: Vec<Line> = summary(entry).into_iter().map(Line::from).collect();
            lines.push(Line::styled(
                ENTRY_SEPARATOR,
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Line::styled(
                format!(" {} ", panel.list_title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::TOP),
    );

    // Selecting the newest entry scrolls it into view
    let mut list_state = ListState::default().with_selected(submissions.len().checked_sub(1));
    frame.render_stateful_widget(list, area, &mut list_state);
}
