use serde::{Deserialize, Serialize};

/// A typed field value as it appears on the wire.
///
/// Replaces the upstream store's untyped snapshot maps: every value a
/// visit snapshot or change set can carry is one of these shapes, decided
/// at deserialization time rather than guessed at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// How a known field's value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// ISO-8601 instant reformatted to the local minute-resolution form.
    Timestamp,
}

/// One entry of the known-field schema — the fixed, ordered list of
/// fields the renderer is configured to display. Snapshot keys outside
/// this schema are never rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownField {
    /// Wire field id, matched exactly against change sets.
    pub id: String,
    /// Human-readable label.
    pub label: String,
    pub kind: FieldKind,
}

impl KnownField {
    pub fn text(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
        }
    }

    pub fn timestamp(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Timestamp,
        }
    }
}

/// The fixed field schema for a patient visit, in display order.
///
/// `updatedBy` and `timestamp` are satisfied from the event itself, not
/// the snapshot; the rest come from the snapshot as of the viewed event.
pub fn default_visit_fields() -> Vec<KnownField> {
    vec![
        KnownField::timestamp("dateTime", "Visit started"),
        KnownField::text("updatedBy", "Updated by"),
        KnownField::timestamp("timestamp", "Updated at"),
        KnownField::text("priority", "Priority"),
        KnownField::text("status", "Status"),
        KnownField::text("condition", "Condition"),
        KnownField::text("chiefComplaint", "Chief complaint"),
        KnownField::text("symptoms", "Symptoms"),
        KnownField::text("bedNumber", "Bed number"),
        KnownField::text("active", "Active"),
    ]
}
