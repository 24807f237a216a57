//! Create-event screen — the form for entering a new event.
//!
//! Validity is recomputed from the draft on every keystroke and gates the
//! submit action. Cancelling a modified form asks for a discard
//! confirmation before closing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{
    Category, EventDraft, normalize_capacity, normalize_date, normalize_time,
};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::confirm::draw_confirm;
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// Field index for the event name.
const NAME: usize = 0;
/// Field index for the date.
const DATE: usize = 1;
/// Field index for the start time.
const TIME: usize = 2;
/// Field index for the location.
const LOCATION: usize = 3;
/// Field index for required notes.
const NOTES: usize = 4;
/// Field index for the optional description.
const DESCRIPTION: usize = 5;
/// Field index for the optional capacity.
const CAPACITY: usize = 6;

/// State for the create-event screen.
#[derive(Debug, Clone)]
pub struct EventCreateState {
    form: Form,
    category: Option<Category>,
    confirm_discard: bool,
    general_error: Option<String>,
}

impl Default for EventCreateState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventCreateState {
    /// Creates a new create-event form with empty fields.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Event Name", true),
                FormField::new("Date (YYYY-MM-DD)", true).with_normalizer(normalize_date),
                FormField::new("Time (HH:MM)", true).with_normalizer(normalize_time),
                FormField::new("Location", true),
                FormField::new("Notes", true),
                FormField::new("Description", false),
                FormField::new("Capacity", false).with_normalizer(normalize_capacity),
            ]),
            category: None,
            confirm_discard: false,
            general_error: None,
        }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.confirm_discard {
            return self.handle_confirm_key(key);
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('c') => {
                    self.category = Some(self.category.map_or(Category::all()[0], Category::next));
                    return Action::None;
                }
                KeyCode::Char('C') => {
                    self.category = Some(
                        self.category
                            .map_or(*Category::all().last().unwrap_or(&Category::Other), |c| {
                                c.prev()
                            }),
                    );
                    return Action::None;
                }
                KeyCode::Char('x') => {
                    self.category = None;
                    return Action::None;
                }
                _ => return Action::None,
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => self.cancel(),
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the chosen category, if any.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Returns `true` while the discard confirmation is showing.
    pub fn confirm_discard(&self) -> bool {
        self.confirm_discard
    }

    /// Sets a general error message not tied to any specific field.
    ///
    /// Used to surface sink failures inline without closing the form.
    pub fn set_error(&mut self, msg: String) {
        self.general_error = Some(msg);
    }

    /// Returns the general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Snapshot of the current field values as a draft.
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            name: self.form.value(NAME).to_string(),
            date: self.form.value(DATE).to_string(),
            time: self.form.value(TIME).to_string(),
            location: self.form.value(LOCATION).to_string(),
            notes: self.form.value(NOTES).to_string(),
            description: self.form.value(DESCRIPTION).to_string(),
            capacity: self.form.value(CAPACITY).to_string(),
            category: self.category,
        }
    }

    /// Returns `true` if the current draft would be accepted on submit.
    pub fn is_submit_enabled(&self) -> bool {
        self.draft().is_valid()
    }

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.form.reset();
        self.category = None;
        self.confirm_discard = false;
        self.general_error = None;
    }

    /// Keys while the discard confirmation is up: `y` closes, `n`/Esc stays.
    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.reset();
                Action::Navigate(Screen::Dashboard)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_discard = false;
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Cancel/close request: confirm first if anything was entered.
    fn cancel(&mut self) -> Action {
        if self.draft().is_modified() {
            self.confirm_discard = true;
            Action::None
        } else {
            self.reset();
            Action::Navigate(Screen::Dashboard)
        }
    }

    /// Validates the draft and attempts to build an event record.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.general_error = None;

        let draft = self.draft();
        if !draft.is_valid() {
            self.mark_field_errors(&draft);
            self.general_error = Some("Please fill in all required fields correctly.".to_string());
            return Action::None;
        }

        match draft.build() {
            Ok(event) => Action::CreateEvent(event),
            Err(e) => {
                // Shouldn't happen since we validated above, but handle gracefully.
                self.general_error = Some(format!("Failed to create event: {e}"));
                Action::None
            }
        }
    }

    /// Marks each failing required field so all errors show at once.
    fn mark_field_errors(&mut self, draft: &EventDraft) {
        if draft.name.trim().is_empty() {
            self.form.set_error(NAME, "required".into());
        }
        if draft.parsed_date().is_none() {
            self.form.set_error(DATE, "enter a date as YYYY-MM-DD".into());
        }
        if draft.time.trim().is_empty() {
            self.form.set_error(TIME, "required".into());
        } else if !crate::model::is_valid_time(&draft.time) {
            self.form.set_error(TIME, "enter a time as HH:MM".into());
        }
        if draft.location.trim().is_empty() {
            self.form.set_error(LOCATION, "required".into());
        }
        if draft.notes.trim().is_empty() {
            self.form.set_error(NOTES, "required".into());
        }
    }
}

/// Renders the create-event screen.
#[mutants::skip]
pub fn draw_event_create(state: &EventCreateState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Create Event ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, category_area, submit_area, error_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(21),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    draw_form(state.form(), frame, form_area);

    let category_label = state
        .category()
        .map_or("-", |c| c.label());
    let category = Paragraph::new(Line::from(vec![
        Span::raw("Category: "),
        Span::styled(category_label, Style::default().fg(Color::Yellow)),
    ]));
    frame.render_widget(category, category_area);

    let submit = if state.is_submit_enabled() {
        Paragraph::new(Line::from(Span::styled(
            "[ Create Event ]  ready — press Enter",
            Style::default().fg(Color::Green),
        )))
    } else {
        Paragraph::new(Line::from(Span::styled(
            "[ Create Event ]  disabled — fill required fields",
            Style::default().fg(Color::DarkGray),
        )))
    };
    frame.render_widget(submit, submit_area);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Alt+c: category  Alt+x: clear category  Enter: create  Esc: cancel",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if state.confirm_discard() {
        draw_confirm(
            "Discard Changes",
            "All entered information will be lost.",
            frame,
            area,
        );
    }
}
