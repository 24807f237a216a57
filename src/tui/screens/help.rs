//! Help screen — scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static DASHBOARD_KEYS: &[(&str, &str)] = &[
    ("n", "create event"),
    ("u", "user management"),
    ("q / Esc", "log out"),
    ("F1", "help"),
];

static EVENT_CREATE_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Alt+c / Shift+Alt+C", "next / prev category"),
    ("Alt+x", "clear category"),
    ("Enter", "create event"),
    ("Esc", "cancel (y/n if modified)"),
    ("F1", "help"),
];

static USERS_KEYS: &[(&str, &str)] = &[
    ("↑/↓", "select user"),
    ("r", "toggle role (y/n to confirm)"),
    ("d", "delete user (y/n to confirm)"),
    ("q / Esc", "back to dashboard"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] scrolled to the top, returning to the dashboard.
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::Dashboard,
        }
    }

    /// Records which screen help was opened from.
    pub fn set_origin(&mut self, origin: Screen) {
        self.origin = origin;
        self.scroll = 0;
    }

    /// Returns the screen to go back to.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

fn section<'a>(title: &'a str, keys: &'a [(&str, &str)]) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<22}"), Style::default().fg(Color::Yellow)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.extend(section("Dashboard", DASHBOARD_KEYS));
    lines.extend(section("Create Event", EVENT_CREATE_KEYS));
    lines.extend(section("User Management", USERS_KEYS));
    lines.extend(section("Help", HELP_KEYS));

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let body = Paragraph::new(lines).scroll((state.scroll(), 0));
    frame.render_widget(body, body_area);

    let footer = Paragraph::new("↑/↓: scroll  q: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
