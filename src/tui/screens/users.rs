//! Admin user-management screen — roster table with role and delete actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::model::{Role, User, sample_users};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::confirm::draw_confirm;

/// A mutation waiting on the admin's y/n confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    ToggleRole(usize),
    Delete(usize),
}

/// Roster statistics shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub coordinators: usize,
    pub staff: usize,
}

/// State for the user-management screen.
#[derive(Debug, Clone)]
pub struct UsersState {
    users: Vec<User>,
    selected: Option<usize>,
    pending: Option<Pending>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersState {
    /// Creates the screen seeded with the sample roster.
    pub fn new() -> Self {
        let users = sample_users();
        let selected = if users.is_empty() { None } else { Some(0) };
        Self {
            users,
            selected,
            pending: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.pending.is_some() {
            return self.handle_confirm_key(key);
        }

        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('r') => {
                if let Some(i) = self.selected {
                    self.pending = Some(Pending::ToggleRole(i));
                }
                Action::None
            }
            KeyCode::Char('d') => {
                if let Some(i) = self.selected {
                    self.pending = Some(Pending::Delete(i));
                }
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Dashboard),
            _ => Action::None,
        }
    }

    /// Returns the roster.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns `true` while a confirmation prompt is showing.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Counts recomputed from the roster after every mutation.
    pub fn stats(&self) -> UserStats {
        let coordinators = self
            .users
            .iter()
            .filter(|u| u.role == Role::Coordinator)
            .count();
        UserStats {
            total: self.users.len(),
            coordinators,
            staff: self.users.len() - coordinators,
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(pending) = self.pending.take() {
                    self.apply(pending);
                }
                Action::None
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.pending = None;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn apply(&mut self, pending: Pending) {
        match pending {
            Pending::ToggleRole(i) => {
                if let Some(user) = self.users.get_mut(i) {
                    user.role = user.role.toggled();
                }
            }
            Pending::Delete(i) => {
                if i < self.users.len() {
                    let _ = self.users.remove(i);
                    self.selected = if self.users.is_empty() {
                        None
                    } else {
                        Some(i.min(self.users.len() - 1))
                    };
                }
            }
        }
    }

    /// Title and message for the active confirmation prompt.
    fn confirm_text(&self) -> Option<(String, String)> {
        let pending = self.pending?;
        match pending {
            Pending::ToggleRole(i) => {
                let user = self.users.get(i)?;
                match user.role {
                    Role::Coordinator => Some((
                        "Remove Coordinator Role".to_string(),
                        format!("Change {} to Staff role?", user.username),
                    )),
                    Role::Staff => Some((
                        "Make Coordinator".to_string(),
                        format!("Grant coordinator role to {}?", user.username),
                    )),
                }
            }
            Pending::Delete(i) => {
                let user = self.users.get(i)?;
                Some((
                    "Delete User".to_string(),
                    format!("Permanently delete {}?", user.username),
                ))
            }
        }
    }

    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.users.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Renders the user-management screen.
#[mutants::skip]
pub fn draw_users(state: &UsersState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" User Management ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.users().is_empty() {
        let lines = vec![Line::from(""), Line::from("No users on the roster.")];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [stats_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let stats = state.stats();
    let stats_line = Paragraph::new(format!(
        "Total users: {}  Coordinators: {}  Staff: {}",
        stats.total, stats.coordinators, stats.staff
    ))
    .style(Style::default().fg(Color::Cyan));
    frame.render_widget(stats_line, stats_area);

    let header = Row::new(vec!["User", "Email", "Role", "Created"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .users()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                format!("({}) {}", user.initial(), user.username),
                user.email.clone(),
                format!("[{}]", user.role),
                user.created.format("%Y-%m-%d").to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(22),
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header);
    frame.render_widget(table, table_area);

    let footer = Paragraph::new("↑/↓: select  r: toggle role (y/n)  d: delete (y/n)  q: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some((title, message)) = state.confirm_text() {
        draw_confirm(&title, &message, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_with_sample_roster_selected_at_top() {
            let state = UsersState::new();
            assert_eq!(state.users().len(), 3);
            assert_eq!(state.selected(), Some(0));
            assert!(!state.has_pending());
        }

        #[test]
        fn initial_stats_match_sample_data() {
            let state = UsersState::new();
            let stats = state.stats();
            assert_eq!(stats.total, 3);
            assert_eq!(stats.coordinators, 2);
            assert_eq!(stats.staff, 1);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn down_and_up_move_selection() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.selected(), Some(1));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.selected(), Some(0));
        }

        #[test]
        fn selection_does_not_wrap() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.selected(), Some(0));
            for _ in 0..5 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.selected(), Some(2));
        }

        #[test]
        fn q_navigates_back_to_dashboard() {
            let mut state = UsersState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::Dashboard)
            );
        }

        #[test]
        fn esc_navigates_back_to_dashboard() {
            let mut state = UsersState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::Dashboard)
            );
        }
    }

    mod role_toggle {
        use super::*;

        #[test]
        fn r_asks_for_confirmation_first() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('r')));
            assert!(state.has_pending());
            assert_eq!(state.users()[0].role, Role::Coordinator);
        }

        #[test]
        fn confirming_demotes_a_coordinator() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('r')));
            state.handle_key(press(KeyCode::Char('y')));
            assert_eq!(state.users()[0].role, Role::Staff);
            assert!(!state.has_pending());
            assert_eq!(state.stats().coordinators, 1);
        }

        #[test]
        fn confirming_promotes_staff() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Char('r')));
            state.handle_key(press(KeyCode::Char('y')));
            assert_eq!(state.users()[2].role, Role::Coordinator);
            assert_eq!(state.stats().coordinators, 3);
        }

        #[test]
        fn declining_leaves_role_unchanged() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('r')));
            state.handle_key(press(KeyCode::Char('n')));
            assert_eq!(state.users()[0].role, Role::Coordinator);
            assert!(!state.has_pending());
        }

        #[test]
        fn esc_declines_too() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('r')));
            state.handle_key(press(KeyCode::Esc));
            assert_eq!(state.users()[0].role, Role::Coordinator);
            assert!(!state.has_pending());
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn d_asks_for_confirmation_first() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('d')));
            assert!(state.has_pending());
            assert_eq!(state.users().len(), 3);
        }

        #[test]
        fn confirming_removes_the_user() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('d')));
            state.handle_key(press(KeyCode::Char('y')));
            assert_eq!(state.users().len(), 2);
            assert_eq!(state.users()[0].username, "jane_smith");
            assert_eq!(state.selected(), Some(0));
        }

        #[test]
        fn deleting_last_row_moves_selection_up() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Char('d')));
            state.handle_key(press(KeyCode::Char('y')));
            assert_eq!(state.users().len(), 2);
            assert_eq!(state.selected(), Some(1));
        }

        #[test]
        fn deleting_everyone_clears_selection() {
            let mut state = UsersState::new();
            for _ in 0..3 {
                state.handle_key(press(KeyCode::Char('d')));
                state.handle_key(press(KeyCode::Char('y')));
            }
            assert!(state.users().is_empty());
            assert_eq!(state.selected(), None);
            assert_eq!(state.stats().total, 0);
        }

        #[test]
        fn declining_keeps_the_user() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('d')));
            state.handle_key(press(KeyCode::Char('n')));
            assert_eq!(state.users().len(), 3);
        }
    }

    mod confirmation_prompt {
        use super::*;

        #[test]
        fn navigation_keys_are_ignored_while_prompting() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('r')));
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.selected(), Some(0));
            assert!(state.has_pending());
        }

        #[test]
        fn q_does_not_leave_while_prompting() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('d')));
            let action = state.handle_key(press(KeyCode::Char('q')));
            assert_eq!(action, Action::None);
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(state: &UsersState, w: u16, h: u16) -> String {
            let backend = TestBackend::new(w, h);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_users(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_roster_and_stats() {
            let state = UsersState::new();
            let output = render(&state, 90, 14);
            assert!(output.contains("User Management"), "should show title");
            assert!(output.contains("john_coordinator"), "should show username");
            assert!(output.contains("(J)"), "should show avatar initial");
            assert!(output.contains("jane@example.com"), "should show email");
            assert!(output.contains("[Coordinator]"), "should show role badge");
            assert!(
                output.contains("Total users: 3  Coordinators: 2  Staff: 1"),
                "should show stats"
            );
        }

        #[test]
        fn renders_confirmation_overlay() {
            let mut state = UsersState::new();
            state.handle_key(press(KeyCode::Char('r')));
            let output = render(&state, 90, 14);
            assert!(output.contains("Remove Coordinator Role"));
            assert!(output.contains("Change john_coordinator to Staff role?"));
        }

        #[test]
        fn renders_empty_roster() {
            let mut state = UsersState::new();
            for _ in 0..3 {
                state.handle_key(press(KeyCode::Char('d')));
                state.handle_key(press(KeyCode::Char('y')));
            }
            let output = render(&state, 90, 14);
            assert!(output.contains("No users on the roster."));
        }
    }
}
