//! TUI screen implementations.

pub mod dashboard;
pub mod event_create;
pub mod help;
pub mod users;

pub use dashboard::{DashboardState, draw_dashboard};
pub use event_create::{EventCreateState, draw_event_create};
pub use help::{HelpState, draw_help};
pub use users::{UsersState, draw_users};
