//! Reusable TUI widgets.

pub mod confirm;
pub mod form;
pub mod status_bar;

pub use confirm::draw_confirm;
pub use form::{Form, FormField, draw_form};
pub use status_bar::{StatusBarContext, draw_status_bar};
