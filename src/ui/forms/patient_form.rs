//! Patient form rendering: inputs, buttons and result

use super::field_renderer::draw_field;
use crate::app::App;
use crate::model::RiskLevel;
use crate::state::{Form, FormButton, INPUT_FIELD_COUNT};
use crate::ui::components::render_action_button;
use crate::ui::FormLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the twelve inputs and the buttons row
pub fn draw_patient_form(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let form = &app.state.session.form;

    for (idx, area) in layout.fields.iter().enumerate().take(INPUT_FIELD_COUNT) {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, *area, field, form.active_field() == idx);
        }
    }

    let on_buttons = form.is_buttons_row_active();
    for (button, area) in FormButton::ALL.iter().zip(layout.buttons) {
        let (enabled, accent) = match button {
            FormButton::Calculate => (app.has_predictor(), Some(Color::Green)),
            FormButton::Reset => (true, None),
        };
        render_action_button(
            frame,
            area,
            button.label(),
            on_buttons && form.selected_button == *button,
            enabled,
            accent,
        );
    }
}

/// Draw the result region
pub fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.session;

    let (line, title) = match &session.result {
        Some(result) => {
            let color = match result.level {
                RiskLevel::High => Color::Red,
                RiskLevel::Low => Color::Green,
            };
            let line = Line::from(vec![
                Span::raw("The patient is at "),
                Span::styled(
                    result.level.label(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" of cardiac arrest."),
            ]);
            let title = format!(" Result ({}) ", result.assessed_at.format("%H:%M:%S"));
            (line, title)
        }
        None => (
            Line::from(Span::styled(
                "No assessment yet",
                Style::default().fg(Color::DarkGray),
            )),
            " Result ".to_string(),
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
