use std::sync::LazyLock;

use regex::Regex;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid hardcoded regex")
});

/// Returns `true` if `time` is a strict 24-hour `HH:MM` value.
///
/// Zero-padding is required: `9:05` and `09:5` are rejected, as are
/// out-of-range values like `25:00` or `14:61`.
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time.trim())
}

/// Normalizes raw time input: strips everything but digits and colons, then
/// auto-inserts a colon once the value is exactly four bare digits
/// (`1400` → `14:00`).
///
/// The auto-insert fires only at length four with no colon present, so the
/// transform never retriggers while the user keeps typing.
pub fn normalize_time(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':')
        .collect();
    if stripped.len() == 4 && !stripped.contains(':') {
        format!("{}:{}", &stripped[..2], &stripped[2..])
    } else {
        stripped
    }
}

/// Normalizes raw capacity input: strips every non-digit character.
pub fn normalize_capacity(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes raw date input: strips everything but digits and hyphens.
///
/// Dates are typed as `YYYY-MM-DD` text; full parsing happens in the
/// validator, not here.
pub fn normalize_date(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}
