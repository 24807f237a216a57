use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Coordinator,
    Staff,
}

impl Role {
    /// Returns the display label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Coordinator => "Coordinator",
            Role::Staff => "Staff",
        }
    }

    /// Returns the other role.
    pub fn toggled(self) -> Role {
        match self {
            Role::Coordinator => Role::Staff,
            Role::Staff => Role::Coordinator,
        }
    }
}

#[mutants::skip]
impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user account shown on the admin screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created: NaiveDate,
}

impl User {
    /// Creates a user. `created` is the account creation date.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        created: NaiveDate,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            role,
            created,
        }
    }

    /// Uppercase first letter of the username, used as the avatar initial.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// The in-memory user list the admin screen starts with.
///
/// There is no user store in scope; these rows stand in for one.
pub fn sample_users() -> Vec<User> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }
    vec![
        User::new(
            "john_coordinator",
            "john@example.com",
            Role::Coordinator,
            date(2024, 1, 15),
        ),
        User::new(
            "jane_smith",
            "jane@example.com",
            Role::Coordinator,
            date(2024, 1, 20),
        ),
        User::new("bob_staff", "bob@example.com", Role::Staff, date(2024, 1, 25)),
    ]
}
