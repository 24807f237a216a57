mod category;
mod event;
mod user;
mod validation;

pub use category::Category;
pub use event::{BuildError, EventDraft, EventRecord};
pub use user::{Role, User, sample_users};
pub use validation::{is_valid_time, normalize_capacity, normalize_date, normalize_time};
