//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use layout::{form_layout, FormLayout, Hit};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = form_layout(frame.area(), app.state.artifact_error.is_some());

    layout::draw_header(frame, layout.header);
    if let (Some(area), Some(message)) = (layout.banner, &app.state.artifact_error) {
        layout::draw_banner(frame, area, message);
    }

    forms::draw_patient_form(frame, &layout, app);
    forms::draw_result(frame, layout.result, app);
    layout::draw_status_bar(frame, layout.status_bar, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
