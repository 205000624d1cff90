use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::FieldValue;

/// One field-level change within a visit event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitChange {
    pub field: String,
    pub new_value: FieldValue,
}

impl VisitChange {
    pub fn new(field: &str, new_value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.to_string(),
            new_value: new_value.into(),
        }
    }
}

/// Full visit state as of one event — not a delta. Consumers may read
/// any field from any event's snapshot without walking earlier events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitSnapshot {
    /// Semantic creation time of the visit. May differ from the first
    /// event's own `timestamp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// `Some(false)` marks a discharged patient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Remaining snapshot fields, keyed by wire field id.
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl VisitSnapshot {
    /// Look up a snapshot value by wire field id.
    pub fn value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "dateTime" => self.date_time.clone().map(FieldValue::Text),
            "active" => self.active.map(FieldValue::Bool),
            _ => self.fields.get(field).cloned(),
        }
    }
}

/// One append-only record of a change to a patient visit.
///
/// Timestamps are non-decreasing across a visit's event sequence; ties
/// keep insertion order. The projector annotates, never reorders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitEvent {
    /// Fields that differ from the prior snapshot. Empty only for the
    /// creation marker.
    #[serde(default)]
    pub changes: Vec<VisitChange>,
    pub snapshot: VisitSnapshot,
    /// Actor who recorded the change. Absent on partially malformed
    /// events; display falls back to "System".
    #[serde(default)]
    pub updated_by: Option<String>,
    /// Instant the change was recorded, ISO-8601.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl VisitEvent {
    /// True iff `field` appears in this event's change set (exact match).
    pub fn changed(&self, field: &str) -> bool {
        self.changes.iter().any(|c| c.field == field)
    }
}

/// The full event history for one visit, as served by
/// `GET /api/patients/timeline/{patientId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitTimeline {
    pub visit_log_id: String,
    pub events: Vec<VisitEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_payload_deserializes_typed() {
        let json = r#"{
            "visitLogId": "vl-301",
            "events": [{
                "changes": [{"field": "condition", "newValue": "stable"}],
                "snapshot": {
                    "dateTime": "2025-01-01T10:00:00Z",
                    "active": false,
                    "bedNumber": 12,
                    "symptoms": ["fever", "cough"],
                    "notes": null
                },
                "updatedBy": "Nurse B",
                "timestamp": "2025-01-02T09:00:00Z"
            }]
        }"#;

        let timeline: VisitTimeline = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.visit_log_id, "vl-301");
        assert_eq!(timeline.events.len(), 1);

        let event = &timeline.events[0];
        assert_eq!(event.updated_by.as_deref(), Some("Nurse B"));
        assert_eq!(
            event.changes,
            vec![VisitChange::new("condition", "stable")]
        );
        assert_eq!(
            event.snapshot.date_time.as_deref(),
            Some("2025-01-01T10:00:00Z")
        );
        assert_eq!(event.snapshot.active, Some(false));
        assert_eq!(
            event.snapshot.value("bedNumber"),
            Some(FieldValue::Number(12.0))
        );
        assert_eq!(
            event.snapshot.value("symptoms"),
            Some(FieldValue::from(vec!["fever", "cough"]))
        );
        assert_eq!(event.snapshot.value("notes"), Some(FieldValue::Null));
    }

    #[test]
    fn malformed_event_still_deserializes() {
        // No updatedBy, no timestamp, no dateTime — degrades, not errors.
        let json = r#"{"changes": [], "snapshot": {}}"#;
        let event: VisitEvent = serde_json::from_str(json).unwrap();
        assert!(event.updated_by.is_none());
        assert!(event.timestamp.is_none());
        assert!(event.snapshot.date_time.is_none());
    }

    #[test]
    fn snapshot_value_resolves_structural_fields() {
        let snapshot = VisitSnapshot {
            date_time: Some("2025-01-01T10:00:00Z".to_string()),
            active: Some(true),
            fields: BTreeMap::new(),
        };
        assert_eq!(
            snapshot.value("dateTime"),
            Some(FieldValue::Text("2025-01-01T10:00:00Z".to_string()))
        );
        assert_eq!(snapshot.value("active"), Some(FieldValue::Bool(true)));
        assert_eq!(snapshot.value("priority"), None);
    }

    #[test]
    fn changed_is_exact_string_match() {
        let event = VisitEvent {
            changes: vec![VisitChange::new("priority", "high")],
            ..Default::default()
        };
        assert!(event.changed("priority"));
        assert!(!event.changed("Priority"));
        assert!(!event.changed("prio"));
    }
}
