//! Status bar widget — persistent one-line session context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from `App` internals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Label of the active screen.
    pub screen_label: String,
    /// Events created this session.
    pub event_count: usize,
    /// Users currently on the roster.
    pub user_count: usize,
}

/// Renders a one-line status bar showing the session context.
///
/// Display format (left-aligned, Cyan):
/// `[Dashboard]  2 events  3 users`
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let events = if ctx.event_count == 1 {
        "1 event".to_string()
    } else {
        format!("{} events", ctx.event_count)
    };
    let users = if ctx.user_count == 1 {
        "1 user".to_string()
    } else {
        format!("{} users", ctx.user_count)
    };

    let spans = vec![
        Span::styled(format!("[{}]", ctx.screen_label), cyan),
        Span::styled("  ", cyan),
        Span::styled(events, cyan),
        Span::styled("  ", cyan),
        Span::styled(users, cyan),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
