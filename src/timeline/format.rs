use chrono::{DateTime, Local};

use crate::config;
use crate::models::FieldValue;

/// Spaces a camelCase wire field id into a display label.
///
/// Internal humps are spaced and lowercased; only the very first
/// character is forced uppercase: `"chiefComplaint"` → `"Chief
/// complaint"`, not title case. Idempotent on its own output.
pub fn prettify_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Display form of a field value.
///
/// Absent and empty values render as the placeholder, never as an empty
/// string; lists join with `", "`; booleans and numbers stringify
/// naturally.
pub fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => config::PLACEHOLDER.to_string(),
        FieldValue::Text(s) if s.is_empty() => config::PLACEHOLDER.to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::List(items) if items.is_empty() => config::PLACEHOLDER.to_string(),
        FieldValue::List(items) => items.join(", "),
    }
}

/// Formats an ISO-8601 instant for display: local time, minute
/// resolution, seconds pinned to `00`.
///
/// Unparseable input renders as "Invalid Date" — a malformed event
/// degrades the display instead of failing the page.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant
            .with_timezone(&Local)
            .format(config::TIMESTAMP_DISPLAY_FORMAT)
            .to_string(),
        Err(_) => config::INVALID_TIMESTAMP.to_string(),
    }
}

/// [`format_timestamp`] over an optional raw value; absent timestamps
/// render the same invalid-date text.
pub fn format_timestamp_opt(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => format_timestamp(raw),
        None => config::INVALID_TIMESTAMP.to_string(),
    }
}
