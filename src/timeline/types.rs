use serde::Serialize;

/// One rendered timeline entry — what changed, who changed it, and when.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// One line per changed field; the creation entry carries a single
    /// fixed line.
    pub title_lines: Vec<String>,
    pub author: String,
    /// Display-formatted timestamp (local time, minute resolution).
    pub timestamp: String,
}

/// Rendered label/value/changed-flag for one known field in one event's
/// context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    /// Wire field id this row was rendered from.
    pub field: String,
    pub label: String,
    pub display_value: String,
    /// True iff the field id appears in the event's change set.
    pub is_changed: bool,
}
