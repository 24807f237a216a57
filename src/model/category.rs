use std::fmt;

use serde::{Deserialize, Serialize};

/// Event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Conference,
    Workshop,
    Concert,
    Festival,
    Seminar,
    Webinar,
    Sports,
    Exhibition,
    Networking,
    Other,
}

static ALL_CATEGORIES: &[Category] = &[
    Category::Conference,
    Category::Workshop,
    Category::Concert,
    Category::Festival,
    Category::Seminar,
    Category::Webinar,
    Category::Sports,
    Category::Exhibition,
    Category::Networking,
    Category::Other,
];

impl Category {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Conference => "Conference",
            Category::Workshop => "Workshop",
            Category::Concert => "Concert",
            Category::Festival => "Festival",
            Category::Seminar => "Seminar",
            Category::Webinar => "Webinar",
            Category::Sports => "Sports",
            Category::Exhibition => "Exhibition",
            Category::Networking => "Networking",
            Category::Other => "Other",
        }
    }

    /// Returns all categories in display order.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }

    /// Returns the category after this one in display order, wrapping around.
    pub fn next(self) -> Category {
        let i = ALL_CATEGORIES
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0);
        ALL_CATEGORIES[(i + 1) % ALL_CATEGORIES.len()]
    }

    /// Returns the category before this one in display order, wrapping around.
    pub fn prev(self) -> Category {
        let i = ALL_CATEGORIES
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0);
        ALL_CATEGORIES[(i + ALL_CATEGORIES.len() - 1) % ALL_CATEGORIES.len()]
    }
}

#[mutants::skip]
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
