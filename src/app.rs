//! Application state and key handling

use crate::config::{FormSlot, TuiConfig};
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Windows reports both press and release
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::F(1) => self.state.focus(FormSlot::Form1),
            KeyCode::F(2) => self.state.focus(FormSlot::Form2),
            KeyCode::Left if ctrl => self.state.focus(FormSlot::Form1),
            KeyCode::Right if ctrl => self.state.focus(FormSlot::Form2),
            KeyCode::Char('s') if ctrl => {
                self.state.submit_active();
            }
            _ => self.handle_form_key(key)?,
        }
        Ok(())
    }

    /// Handle keys inside the focused form
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_button = self.state.active_panel().is_button_active();
        let panel = self.state.active_panel_mut();

        match key.code {
            KeyCode::Tab | KeyCode::Down => panel.next_field(),
            KeyCode::BackTab | KeyCode::Up => panel.prev_field(),
            KeyCode::Enter if on_button => {
                self.state.submit_active();
            }
            KeyCode::Enter => panel.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                panel.input_char(c)?
            }
            KeyCode::Backspace => panel.backspace()?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SubmitOutcome;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(ctrl('c')).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_function_keys_switch_forms() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(2))).unwrap();
        assert_eq!(app.state.active_form, FormSlot::Form2);
        app.handle_key(key(KeyCode::F(1))).unwrap();
        assert_eq!(app.state.active_form, FormSlot::Form1);
    }

    #[test]
    fn test_typing_goes_to_focused_form_only() {
        let mut app = app();
        type_text(&mut app, "Ana");
        app.handle_key(key(KeyCode::F(2))).unwrap();
        type_text(&mut app, "Superior");

        assert_eq!(app.state.residence.controller.value("nome"), "Ana");
        assert_eq!(
            app.state.profile.controller.value("grauescolar"),
            "Superior"
        );
    }

    #[test]
    fn test_enter_moves_to_next_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.residence.active_field_index, 1);
    }

    #[test]
    fn test_fill_and_submit_with_keyboard() {
        let mut app = app();
        for (i, text) in ["Ana", "Rua das Flores", "Centro", "São Paulo"]
            .iter()
            .enumerate()
        {
            if i > 0 {
                app.handle_key(key(KeyCode::Tab)).unwrap();
            }
            type_text(&mut app, text);
        }
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert!(app.state.residence.is_button_active());

        app.handle_key(key(KeyCode::Enter)).unwrap();

        let submissions = app.state.residence.controller.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].value("cidade"), "São Paulo");
        assert_eq!(app.state.residence.controller.value("nome"), "");
        assert_eq!(app.state.residence.active_field_index, 0);
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(2))).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "bad");

        app.handle_key(ctrl('s')).unwrap();

        assert_eq!(
            app.state.profile.controller.error("email"),
            Some("Email inválido")
        );
        assert_eq!(app.state.profile.controller.value("email"), "bad");
        // ctrl+s must not be typed into the field
        assert!(!app.state.profile.controller.value("email").contains('s'));
    }

    #[test]
    fn test_backspace_clears_error_of_edited_field() {
        let mut app = app();
        type_text(&mut app, "Ana");
        assert_eq!(
            app.state.submit_active(),
            SubmitOutcome::Rejected { errors: 3 }
        );
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "R");
        app.handle_key(key(KeyCode::Backspace)).unwrap();

        assert!(app.state.residence.controller.error("endereco").is_none());
        assert!(app.state.residence.controller.error("bairro").is_some());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        app.handle_key(release).unwrap();
        assert_eq!(app.state.residence.controller.value("nome"), "");
    }
}
