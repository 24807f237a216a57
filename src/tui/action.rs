//! Actions returned by screen event handlers.

use crate::model::EventRecord;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update global state and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Hand a successfully built event to the sink and close the form.
    CreateEvent(EventRecord),
    /// End the session.
    Logout,
}
