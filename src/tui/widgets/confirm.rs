//! Yes/no confirmation prompt rendered over the active screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Renders a centered confirmation box with a title and message.
///
/// The caller owns the pending decision; this widget only displays it.
#[mutants::skip]
pub fn draw_confirm(title: &str, message: &str, frame: &mut Frame, area: Rect) {
    let width = (message.len() as u16 + 6)
        .max(title.len() as u16 + 6)
        .max(30)
        .min(area.width);
    let [h_area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [box_area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(h_area);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("y: confirm  n: keep editing"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, box_area);
    frame.render_widget(paragraph, box_area);
}
