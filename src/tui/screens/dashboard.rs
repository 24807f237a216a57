//! Coordinator dashboard — lists events created this session.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::EventRecord;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the dashboard screen.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Transient success notice shown after an event is created.
    notice: Option<String>,
}

impl DashboardState {
    /// Creates a new dashboard state with no notice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('n') => {
                self.notice = None;
                Action::Navigate(Screen::EventCreate)
            }
            KeyCode::Char('u') => {
                self.notice = None;
                Action::Navigate(Screen::Users)
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Logout,
            _ => Action::None,
        }
    }

    /// Sets the transient notice line.
    pub fn set_notice(&mut self, msg: String) {
        self.notice = Some(msg);
    }

    /// Returns the current notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

/// Renders the dashboard with the session's events.
#[mutants::skip]
pub fn draw_dashboard(
    state: &DashboardState,
    events: &[EventRecord],
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Coordinator Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if events.is_empty() {
        let mut lines = vec![
            Line::from(""),
            Line::from("No events yet."),
            Line::from("Press 'n' to create an event."),
        ];
        if let Some(notice) = state.notice() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                notice.to_string(),
                Style::default().fg(Color::Green),
            ));
        }
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(vec!["Event", "Date", "Time", "Location", "Cap", "Category"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = events
        .iter()
        .map(|event| {
            Row::new(vec![
                event.name.clone(),
                event.date.format("%Y-%m-%d").to_string(),
                event.time.clone(),
                event.location.clone(),
                event
                    .capacity
                    .map_or_else(|| "-".to_string(), |c| c.to_string()),
                event
                    .category
                    .map_or_else(|| "-".to_string(), |c| c.label().to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Min(12),
        Constraint::Length(5),
        Constraint::Length(11),
    ];

    let table = Table::new(rows, widths).header(header);

    let [stats_area, table_area, notice_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let stats = Paragraph::new(format!("Total events: {}", events.len()))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(stats, stats_area);

    frame.render_widget(table, table_area);

    if let Some(notice) = state.notice() {
        let line = Paragraph::new(notice).style(Style::default().fg(Color::Green));
        frame.render_widget(line, notice_area);
    }

    let footer = Paragraph::new("n: new event  u: users  q: log out")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
