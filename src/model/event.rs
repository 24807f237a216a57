use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;
use super::validation::is_valid_time;

/// Date format typed into the create-event form.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from building an [`EventRecord`] out of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// One or more required fields is missing or malformed.
    #[error("Please fill in all required fields correctly.")]
    InvalidForm,
}

/// The live field values of one open create-event form.
///
/// All fields hold raw (already character-masked) text exactly as typed;
/// nothing here is trimmed or parsed until [`is_valid`](Self::is_valid) or
/// [`build`](Self::build) look at it. The draft lives only as long as the
/// form is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub name: String,
    /// Raw date text, expected as `YYYY-MM-DD`.
    pub date: String,
    /// Raw time text, expected as `HH:MM`.
    pub time: String,
    pub location: String,
    pub notes: String,
    pub description: String,
    /// Raw capacity text, digits only.
    pub capacity: String,
    pub category: Option<Category>,
}

impl EventDraft {
    /// Parses the date text as a calendar date, if it is one.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Returns `true` if the draft is submittable.
    ///
    /// All of the following must hold: name, time, location, and notes are
    /// non-blank after trimming; the date text parses as a calendar date;
    /// the time is a strict 24-hour `HH:MM`. Description, capacity, and
    /// category never affect validity.
    pub fn is_valid(&self) -> bool {
        if self.name.trim().is_empty() {
            return false;
        }
        if self.parsed_date().is_none() {
            return false;
        }
        if self.time.trim().is_empty() {
            return false;
        }
        if !is_valid_time(&self.time) {
            return false;
        }
        if self.location.trim().is_empty() {
            return false;
        }
        if self.notes.trim().is_empty() {
            return false;
        }
        true
    }

    /// Returns `true` if any field holds a non-default value.
    ///
    /// Used to decide whether closing the form should ask for a discard
    /// confirmation. Optional fields count as modifications too.
    pub fn is_modified(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.date.trim().is_empty()
            || !self.time.trim().is_empty()
            || !self.location.trim().is_empty()
            || !self.notes.trim().is_empty()
            || !self.description.trim().is_empty()
            || !self.capacity.trim().is_empty()
            || self.category.is_some()
    }

    /// Builds an [`EventRecord`] from the draft.
    ///
    /// Refuses with [`BuildError::InvalidForm`] if the draft is not valid.
    /// A capacity that fails to parse is silently omitted rather than
    /// treated as an error; it is an optional best-effort field.
    pub fn build(&self) -> Result<EventRecord, BuildError> {
        if !self.is_valid() {
            return Err(BuildError::InvalidForm);
        }
        let date = self.parsed_date().ok_or(BuildError::InvalidForm)?;

        let description = self.description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());

        let capacity = self.capacity.trim().parse::<u32>().ok();

        Ok(EventRecord {
            name: self.name.trim().to_string(),
            date,
            time: self.time.trim().to_string(),
            location: self.location.trim().to_string(),
            notes: self.notes.trim().to_string(),
            description,
            capacity,
            category: self.category,
        })
    }
}

/// The structured result of a successful form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn valid_draft() -> EventDraft {
        EventDraft {
            name: "Launch Party".into(),
            date: "2025-06-01".into(),
            time: "18:00".into(),
            location: "Main Hall".into(),
            notes: "bring ID".into(),
            ..EventDraft::default()
        }
    }

    mod validity {
        use super::*;

        #[test]
        fn empty_draft_is_invalid() {
            assert!(!EventDraft::default().is_valid());
        }

        #[test]
        fn filled_required_fields_are_valid() {
            assert!(valid_draft().is_valid());
        }

        #[test]
        fn blank_name_invalidates() {
            let mut draft = valid_draft();
            draft.name = "   ".into();
            assert!(!draft.is_valid());
        }

        #[test]
        fn unparseable_date_invalidates() {
            let mut draft = valid_draft();
            draft.date = "2025-13-01".into();
            assert!(!draft.is_valid());
            draft.date = "2025-06".into();
            assert!(!draft.is_valid());
        }

        #[test]
        fn blank_time_invalidates() {
            let mut draft = valid_draft();
            draft.time = String::new();
            assert!(!draft.is_valid());
        }

        #[test]
        fn malformed_time_invalidates() {
            let mut draft = valid_draft();
            draft.time = "25:61".into();
            assert!(!draft.is_valid());
            draft.time = "9:5".into();
            assert!(!draft.is_valid());
        }

        #[test]
        fn blank_location_invalidates() {
            let mut draft = valid_draft();
            draft.location = " ".into();
            assert!(!draft.is_valid());
        }

        #[test]
        fn blank_notes_invalidates() {
            let mut draft = valid_draft();
            draft.notes = String::new();
            assert!(!draft.is_valid());
        }

        #[test]
        fn optional_fields_never_affect_validity() {
            let mut draft = valid_draft();
            draft.description = String::new();
            draft.capacity = "not-a-number".into();
            draft.category = None;
            assert!(draft.is_valid());

            draft.description = "big party".into();
            draft.capacity = "250".into();
            draft.category = Some(Category::Festival);
            assert!(draft.is_valid());
        }

        /// Validity is exactly the conjunction of the six required-field
        /// conditions, regardless of what the optional fields hold.
        #[quickcheck]
        fn validity_is_conjunction_of_required_conditions(
            blank_name: bool,
            bad_date: bool,
            bad_time: bool,
            blank_location: bool,
            blank_notes: bool,
            description: String,
            capacity: String,
        ) -> bool {
            let draft = EventDraft {
                name: if blank_name { "  ".into() } else { "Expo".into() },
                date: if bad_date {
                    "junk".into()
                } else {
                    "2025-06-01".into()
                },
                time: if bad_time { "99:99".into() } else { "18:00".into() },
                location: if blank_location {
                    String::new()
                } else {
                    "Hall B".into()
                },
                notes: if blank_notes { String::new() } else { "vip".into() },
                description,
                capacity,
                category: None,
            };
            let expected =
                !blank_name && !bad_date && !bad_time && !blank_location && !blank_notes;
            draft.is_valid() == expected
        }
    }

    mod modification {
        use super::*;

        #[test]
        fn untouched_draft_is_unmodified() {
            assert!(!EventDraft::default().is_modified());
        }

        #[test]
        fn whitespace_only_counts_as_unmodified() {
            let draft = EventDraft {
                name: "   ".into(),
                ..EventDraft::default()
            };
            assert!(!draft.is_modified());
        }

        #[test]
        fn any_required_field_counts() {
            let draft = EventDraft {
                name: "x".into(),
                ..EventDraft::default()
            };
            assert!(draft.is_modified());
        }

        #[test]
        fn optional_fields_count() {
            let draft = EventDraft {
                description: "details".into(),
                ..EventDraft::default()
            };
            assert!(draft.is_modified());

            let draft = EventDraft {
                category: Some(Category::Other),
                ..EventDraft::default()
            };
            assert!(draft.is_modified());
        }
    }

    mod build {
        use super::*;

        #[test]
        fn invalid_draft_is_refused() {
            assert_eq!(EventDraft::default().build(), Err(BuildError::InvalidForm));
        }

        #[test]
        fn required_fields_are_trimmed() {
            let draft = EventDraft {
                name: "  Launch Party  ".into(),
                date: " 2025-06-01 ".into(),
                time: " 18:00 ".into(),
                location: " Main Hall ".into(),
                notes: " bring ID ".into(),
                ..EventDraft::default()
            };
            let record = draft.build().unwrap();
            assert_eq!(record.name, "Launch Party");
            assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
            assert_eq!(record.time, "18:00");
            assert_eq!(record.location, "Main Hall");
            assert_eq!(record.notes, "bring ID");
        }

        #[test]
        fn optional_fields_omitted_when_blank() {
            let record = valid_draft().build().unwrap();
            assert_eq!(record.description, None);
            assert_eq!(record.capacity, None);
            assert_eq!(record.category, None);
        }

        #[test]
        fn blank_description_omitted_not_empty_string() {
            let mut draft = valid_draft();
            draft.description = "   ".into();
            assert_eq!(draft.build().unwrap().description, None);
        }

        #[test]
        fn nonblank_description_included_trimmed() {
            let mut draft = valid_draft();
            draft.description = "  a big one  ".into();
            assert_eq!(
                draft.build().unwrap().description,
                Some("a big one".to_string())
            );
        }

        #[test]
        fn parseable_capacity_included() {
            let mut draft = valid_draft();
            draft.capacity = "250".into();
            assert_eq!(draft.build().unwrap().capacity, Some(250));
        }

        #[test]
        fn unparseable_capacity_silently_omitted() {
            let mut draft = valid_draft();
            // Overflows u32 after character masking; parse fails quietly.
            draft.capacity = "99999999999999999999".into();
            assert_eq!(draft.build().unwrap().capacity, None);
        }

        #[test]
        fn empty_capacity_omitted() {
            let mut draft = valid_draft();
            draft.capacity = String::new();
            assert_eq!(draft.build().unwrap().capacity, None);
        }

        #[test]
        fn chosen_category_included() {
            let mut draft = valid_draft();
            draft.category = Some(Category::Concert);
            assert_eq!(draft.build().unwrap().category, Some(Category::Concert));
        }

        #[test]
        fn build_has_no_side_effects_on_draft() {
            let draft = valid_draft();
            let before = draft.clone();
            let _ = draft.build().unwrap();
            assert_eq!(draft, before);
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn omitted_optionals_are_absent_from_json() {
            let record = valid_draft().build().unwrap();
            let json = serde_json::to_string(&record).unwrap();
            assert!(!json.contains("description"));
            assert!(!json.contains("capacity"));
            assert!(!json.contains("category"));
        }

        #[test]
        fn present_optionals_round_trip() {
            let mut draft = valid_draft();
            draft.description = "details".into();
            draft.capacity = "42".into();
            draft.category = Some(Category::Webinar);
            let record = draft.build().unwrap();
            let json = serde_json::to_string(&record).unwrap();
            let back: EventRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(back, record);
        }
    }
}
