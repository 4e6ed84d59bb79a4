//! Application state definitions

use super::forms::{profile_form, residence_form, FormPanel, SubmitOutcome};
use crate::config::{FormSlot, TuiConfig};

/// Application state: both forms side by side and the shared status line
#[derive(Debug, Clone)]
pub struct AppState {
    /// Formulário 1
    pub residence: FormPanel,
    /// Formulário 2
    pub profile: FormPanel,
    /// Form receiving keyboard input
    pub active_form: FormSlot,
    /// Outcome of the last submit, shown in the status bar
    pub status_message: Option<String>,
    pub last_outcome: Option<SubmitOutcome>,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            residence: residence_form(),
            profile: profile_form(),
            active_form: FormSlot::default(),
            status_message: None,
            last_outcome: None,
            show_help: true,
        }
    }
}

impl AppState {
    pub fn from_config(config: &TuiConfig) -> Self {
        Self {
            active_form: config.initial_form(),
            show_help: config.show_help(),
            ..Self::default()
        }
    }

    pub fn active_panel(&self) -> &FormPanel {
        match self.active_form {
            FormSlot::Form1 => &self.residence,
            FormSlot::Form2 => &self.profile,
        }
    }

    pub fn active_panel_mut(&mut self) -> &mut FormPanel {
        match self.active_form {
            FormSlot::Form1 => &mut self.residence,
            FormSlot::Form2 => &mut self.profile,
        }
    }

    pub fn focus(&mut self, slot: FormSlot) {
        self.active_form = slot;
    }

    /// Submit the active form and record the outcome in the status line
    pub fn submit_active(&mut self) -> SubmitOutcome {
        let panel = self.active_panel_mut();
        let outcome = panel.submit();
        let message = match outcome {
            SubmitOutcome::Accepted { .. } => format!("{}: entrada adicionada", panel.title),
            SubmitOutcome::Rejected { errors } => {
                format!("{}: {errors} campo(s) inválido(s)", panel.title)
            }
        };
        self.status_message = Some(message);
        self.last_outcome = Some(outcome);
        outcome
    }
}
