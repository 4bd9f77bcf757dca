//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = match &field.value {
        FieldValue::Text(_) if display_value.is_empty() && !is_active => "(empty)".to_string(),
        _ => display_value,
    };

    // Choices are changed with arrows, so they get no text cursor
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(hint) = field.hint() {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {hint} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.block(block), area);
}
