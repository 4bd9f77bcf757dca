//! Layout components (header, banner, status bar) and screen geometry

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::platform::{CALCULATE_SHORTCUT, COPY_SHORTCUT, RESET_SHORTCUT};
use crate::state::{FormButton, INPUT_FIELD_COUNT, LEFT_COLUMN_FIELDS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Field height in rows (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

const HEADER_HEIGHT: u16 = 2;
const BANNER_HEIGHT: u16 = 3;
const RESULT_HEIGHT: u16 = 3;

/// Screen regions for one frame, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub banner: Option<Rect>,
    /// Input areas in focus order
    pub fields: Vec<Rect>,
    pub buttons: [Rect; 2],
    pub result: Rect,
    pub status_bar: Rect,
}

/// What a screen position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Field(usize),
    Button(FormButton),
}

impl FormLayout {
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(col, row);
        if let Some(idx) = self.fields.iter().position(|r| r.contains(pos)) {
            return Some(Hit::Field(idx));
        }
        FormButton::ALL
            .iter()
            .zip(&self.buttons)
            .find(|(_, r)| r.contains(pos))
            .map(|(b, _)| Hit::Button(*b))
    }
}

/// Create the main layout
pub fn form_layout(area: Rect, show_banner: bool) -> FormLayout {
    let right_count = INPUT_FIELD_COUNT - LEFT_COLUMN_FIELDS;
    let columns_height = FIELD_HEIGHT * LEFT_COLUMN_FIELDS as u16;
    let banner_height = if show_banner { BANNER_HEIGHT } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Length(columns_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(RESULT_HEIGHT),
            Constraint::Min(0),    // Slack
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let left = field_column(columns[0], LEFT_COLUMN_FIELDS);
    let right = field_column(columns[1], right_count);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);

    FormLayout {
        header: rows[0],
        banner: show_banner.then_some(rows[1]),
        fields: left.into_iter().chain(right).collect(),
        buttons: [buttons[0], buttons[1]],
        result: rows[4],
        status_bar: rows[6],
    }
}

/// Stack `count` fields from the top of a column
fn field_column(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); count];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    chunks[..count].to_vec()
}

/// Draw the centered title block
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Out-of-Hospital Cardiac Arrest Prediction",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Patient Information",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the persistent artifact load error
pub fn draw_banner(frame: &mut Frame, area: Rect, message: &str) {
    let text = format!("Error loading model and scaler: {message}");
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let left = match &app.state.status_message {
        Some(message) => Span::styled(message.clone(), Style::default().fg(Color::Green)),
        None => Span::styled(
            format!(
                " Tab: next | ←/→: change | {CALCULATE_SHORTCUT}: calculate | \
                 {RESET_SHORTCUT}: reset | {COPY_SHORTCUT}: copy | Ctrl+Q: quit"
            ),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let session = app.state.session.id.simple().to_string();
    let right = Span::styled(
        format!("session {} ", &session[..8]),
        Style::default().fg(Color::DarkGray),
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(left)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn test_layout_has_every_field() {
        let layout = form_layout(area(), false);
        assert_eq!(layout.fields.len(), INPUT_FIELD_COUNT);
        assert!(layout.banner.is_none());
        assert!(layout.fields.iter().all(|r| r.height == FIELD_HEIGHT));
    }

    #[test]
    fn test_columns_split_left_then_right() {
        let layout = form_layout(area(), false);
        let left_x = layout.fields[0].x;
        assert!(layout.fields[..LEFT_COLUMN_FIELDS]
            .iter()
            .all(|r| r.x == left_x));
        assert!(layout.fields[LEFT_COLUMN_FIELDS..]
            .iter()
            .all(|r| r.x > left_x));
        // Right column starts at the top
        assert_eq!(layout.fields[LEFT_COLUMN_FIELDS].y, layout.fields[0].y);
    }

    #[test]
    fn test_banner_pushes_form_down() {
        let plain = form_layout(area(), false);
        let with_banner = form_layout(area(), true);
        assert!(with_banner.banner.is_some());
        assert_eq!(with_banner.fields[0].y, plain.fields[0].y + BANNER_HEIGHT);
    }

    #[test]
    fn test_hit_field_and_buttons() {
        let layout = form_layout(area(), false);
        let age = layout.fields[1];
        assert_eq!(layout.hit(age.x + 1, age.y + 1), Some(Hit::Field(1)));

        let slope = layout.fields[11];
        assert_eq!(layout.hit(slope.x + 2, slope.y), Some(Hit::Field(11)));

        let reset = layout.buttons[1];
        assert_eq!(
            layout.hit(reset.x + 1, reset.y + 1),
            Some(Hit::Button(FormButton::Reset))
        );
    }

    #[test]
    fn test_hit_outside_is_none() {
        let layout = form_layout(area(), false);
        assert_eq!(layout.hit(1, 0), None);
        assert_eq!(layout.hit(1, layout.status_bar.y), None);
    }
}
