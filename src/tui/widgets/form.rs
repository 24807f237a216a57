//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// In-place corrector applied to a field's value after every edit.
///
/// A plain `fn` pointer so [`FormField`] stays `Clone` + `Debug`.
pub type Normalizer = fn(&str) -> String;

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown above the input.
    pub label: String,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
    /// Character-mask / auto-format transform, if the field has one.
    pub normalizer: Option<Normalizer>,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            error: None,
            required,
            normalizer: None,
        }
    }

    /// Attaches a normalizer that silently corrects the value on every edit.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    fn apply_normalizer(&mut self) {
        if let Some(normalize) = self.normalizer {
            let corrected = normalize(&self.value);
            if corrected != self.value {
                self.value = corrected;
            }
        }
    }
}

/// A multi-field text form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Appends a character to the focused field, then runs its normalizer.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
            field.apply_normalizer();
        }
    }

    /// Deletes the last character from the focused field, then runs its
    /// normalizer; the mask holds on every change, not just insertions.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
            field.apply_normalizer();
        }
    }

    /// Replaces the value of the field at `index`, running its normalizer.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
            field.apply_normalizer();
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns all field values as a vector of string slices.
    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.value.as_str()).collect()
    }

    /// Resets all field values and errors.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = vec![Span::raw(&field.value)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Draw error below the field if there's space
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            // Render error overlapping the bottom of the row area
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
