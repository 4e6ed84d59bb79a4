//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `form_view`: Layout shared by both forms
//! - `residence_form`: Formulário 1
//! - `profile_form`: Formulário 2

mod field_renderer;
mod form_view;
mod profile_form;
mod residence_form;

pub use profile_form::draw as draw_profile;
pub use residence_form::draw as draw_residence;
