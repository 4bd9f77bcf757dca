//! Modal dialogs

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const DIALOG_MAX_WIDTH: u16 = 60;

/// Center a box of at most `width` x `height` inside `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]);

    // Borders and padding take 4 columns
    let text_width = usize::from(DIALOG_MAX_WIDTH - 4);
    let message_lines: u16 = error_message
        .split('\n')
        .map(|l| l.chars().count().max(1).div_ceil(text_width) as u16)
        .sum();
    let height = message_lines + 4; // borders + blank + hint

    let area = centered(frame.area(), DIALOG_MAX_WIDTH, height);
    frame.render_widget(Clear, area);

    let mut content: Vec<Line> = error_message
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    content.push(Line::from(""));
    content.push(hint);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    " Error ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let dialog = centered(area, 60, 6);
        assert_eq!(dialog.width, 60);
        assert_eq!(dialog.height, 6);
        assert_eq!(dialog.x, 20);
        assert_eq!(dialog.y, 17);
    }

    #[test]
    fn test_centered_shrinks_to_area() {
        let area = Rect::new(0, 0, 30, 4);
        let dialog = centered(area, 60, 6);
        assert_eq!(dialog.width, 30);
        assert_eq!(dialog.height, 4);
    }
}
