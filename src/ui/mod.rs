//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::config::FormSlot;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (left, right, status_area) = layout::create_layout(frame.area());
    let state = &app.state;

    forms::draw_residence(
        frame,
        left,
        &state.residence,
        state.active_form == FormSlot::Form1,
    );
    forms::draw_profile(
        frame,
        right,
        &state.profile,
        state.active_form == FormSlot::Form2,
    );

    layout::draw_status_bar(frame, status_area, app);
}
