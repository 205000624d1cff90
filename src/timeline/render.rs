use crate::config;
use crate::models::{FieldKind, FieldValue, KnownField, VisitEvent, VisitTimeline};

use super::format::{display_value, format_timestamp};
use super::types::FieldView;
use super::TimelineError;

/// Notice shown alongside the field view when the snapshot marks the
/// patient inactive.
pub const DISCHARGE_NOTICE: &str = "Patient has been discharged from this visit";

/// Renders one event against the known-field schema.
///
/// Output preserves the schema's order and length exactly: snapshot keys
/// outside the schema are never rendered, and schema fields missing from
/// the snapshot render as the placeholder. The event's own actor and
/// timestamp are injected under the ids `updatedBy` and `timestamp`,
/// overriding any same-named snapshot keys. Timestamp-kind fields are
/// reformatted to the local minute-resolution display form.
pub fn render_field_view(event: &VisitEvent, known_fields: &[KnownField]) -> Vec<FieldView> {
    known_fields
        .iter()
        .map(|known| FieldView {
            field: known.id.clone(),
            label: known.label.clone(),
            display_value: render_value(event, known),
            is_changed: event.changed(&known.id),
        })
        .collect()
}

/// The discharge notice for an event, if its snapshot marks the visit
/// inactive. A presentation rule layered on top of field rendering, not
/// part of it.
pub fn discharge_notice(event: &VisitEvent) -> Option<&'static str> {
    match event.snapshot.active {
        Some(false) => Some(DISCHARGE_NOTICE),
        _ => None,
    }
}

/// Selects a single event for detail rendering.
///
/// An out-of-range index is "not found", never a panic — the page
/// renders an explicit error message for it.
pub fn event_at(timeline: &VisitTimeline, index: usize) -> Result<&VisitEvent, TimelineError> {
    timeline
        .events
        .get(index)
        .ok_or(TimelineError::EventNotFound {
            index,
            len: timeline.events.len(),
        })
}

fn render_value(event: &VisitEvent, known: &KnownField) -> String {
    match resolve_value(event, &known.id) {
        Some(FieldValue::Text(raw)) if known.kind == FieldKind::Timestamp => {
            format_timestamp(&raw)
        }
        Some(value) => display_value(&value),
        None => config::PLACEHOLDER.to_string(),
    }
}

/// Event-level `updatedBy` and `timestamp` win over snapshot keys of the
/// same name.
fn resolve_value(event: &VisitEvent, field: &str) -> Option<FieldValue> {
    match field {
        "updatedBy" => event.updated_by.clone().map(FieldValue::Text),
        "timestamp" => event.timestamp.clone().map(FieldValue::Text),
        _ => event.snapshot.value(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_visit_fields, VisitChange, VisitSnapshot};
    use std::collections::BTreeMap;

    fn sample_event() -> VisitEvent {
        let mut fields = BTreeMap::new();
        fields.insert("priority".to_string(), FieldValue::from("high"));
        fields.insert(
            "symptoms".to_string(),
            FieldValue::from(vec!["fever", "cough"]),
        );
        fields.insert("offSchemaKey".to_string(), FieldValue::from("hidden"));
        VisitEvent {
            changes: vec![VisitChange::new("priority", "high")],
            snapshot: VisitSnapshot {
                date_time: Some("2025-01-01T10:00:00Z".to_string()),
                active: Some(true),
                fields,
            },
            updated_by: Some("Nurse B".to_string()),
            timestamp: Some("2025-01-02T09:00:00Z".to_string()),
        }
    }

    #[test]
    fn output_length_matches_schema_not_snapshot() {
        let event = sample_event();
        let schema = default_visit_fields();
        let view = render_field_view(&event, &schema);
        assert_eq!(view.len(), schema.len());
        assert!(view.iter().all(|f| f.field != "offSchemaKey"));
    }

    #[test]
    fn only_changed_field_is_flagged() {
        let view = render_field_view(&sample_event(), &default_visit_fields());
        for field_view in &view {
            assert_eq!(
                field_view.is_changed,
                field_view.field == "priority",
                "unexpected change flag on {}",
                field_view.field
            );
        }
    }

    #[test]
    fn schema_fields_missing_from_snapshot_render_placeholder() {
        let view = render_field_view(&sample_event(), &default_visit_fields());
        let condition = view.iter().find(|f| f.field == "condition").unwrap();
        assert_eq!(condition.display_value, "—");
    }

    #[test]
    fn event_actor_and_timestamp_are_injected() {
        let mut event = sample_event();
        // Snapshot carries conflicting keys; the event-level values win.
        event
            .snapshot
            .fields
            .insert("updatedBy".to_string(), FieldValue::from("Impostor"));
        event
            .snapshot
            .fields
            .insert("timestamp".to_string(), FieldValue::from("1999-01-01T00:00:00Z"));

        let view = render_field_view(&event, &default_visit_fields());
        let updated_by = view.iter().find(|f| f.field == "updatedBy").unwrap();
        assert_eq!(updated_by.display_value, "Nurse B");

        let timestamp = view.iter().find(|f| f.field == "timestamp").unwrap();
        assert_eq!(
            timestamp.display_value,
            crate::timeline::format_timestamp("2025-01-02T09:00:00Z")
        );
    }

    #[test]
    fn timestamp_kind_fields_are_reformatted() {
        let view = render_field_view(&sample_event(), &default_visit_fields());
        let date_time = view.iter().find(|f| f.field == "dateTime").unwrap();
        assert_eq!(
            date_time.display_value,
            crate::timeline::format_timestamp("2025-01-01T10:00:00Z")
        );
        assert!(date_time.display_value.ends_with(":00"));
    }

    #[test]
    fn list_values_render_joined() {
        let view = render_field_view(&sample_event(), &default_visit_fields());
        let symptoms = view.iter().find(|f| f.field == "symptoms").unwrap();
        assert_eq!(symptoms.display_value, "fever, cough");
    }

    #[test]
    fn discharge_notice_only_when_inactive() {
        let mut event = sample_event();
        assert!(discharge_notice(&event).is_none());

        event.snapshot.active = Some(false);
        assert_eq!(discharge_notice(&event), Some(DISCHARGE_NOTICE));

        event.snapshot.active = None;
        assert!(discharge_notice(&event).is_none());
    }

    #[test]
    fn event_at_out_of_range_is_not_found() {
        let timeline = VisitTimeline {
            visit_log_id: "vl-301".to_string(),
            events: vec![sample_event()],
        };
        assert!(event_at(&timeline, 0).is_ok());

        let err = event_at(&timeline, 3).unwrap_err();
        match err {
            TimelineError::EventNotFound { index, len } => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
        }
    }
}
