use crate::models::{VisitChange, VisitEvent};

use super::format::{display_value, format_timestamp_opt, prettify_field_name};
use super::types::TimelineEntry;

/// Title line of the synthetic creation entry.
pub const CREATED_TITLE: &str = "Patient Visit Created";

/// Author shown when an event carries no actor.
pub const SYSTEM_AUTHOR: &str = "System";

/// Projects an ordered visit event list into display-ready timeline
/// entries.
///
/// Entry 0 is always synthetic: it announces the visit's creation,
/// attributed to the first event's author and to the visit's semantic
/// creation time (`snapshot.dateTime` — which may differ from the first
/// event's own `timestamp`). The first event contributes exactly that one
/// entry regardless of its own change set.
///
/// Every later event with a non-empty change set contributes one entry,
/// one title line per changed field. Later events with an empty change
/// set contribute nothing. Input order is preserved exactly; nothing is
/// sorted or deduplicated.
///
/// An empty slice projects to an empty list — the store guarantees at
/// least the creation event, and a missing guarantee reads as "no data"
/// rather than an error.
pub fn project_timeline(events: &[VisitEvent]) -> Vec<TimelineEntry> {
    let Some(first) = events.first() else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(events.len());
    entries.push(TimelineEntry {
        title_lines: vec![CREATED_TITLE.to_string()],
        author: author_of(first),
        timestamp: format_timestamp_opt(first.snapshot.date_time.as_deref()),
    });

    for event in &events[1..] {
        if event.changes.is_empty() {
            continue;
        }
        entries.push(TimelineEntry {
            title_lines: event.changes.iter().map(change_line).collect(),
            author: author_of(event),
            timestamp: format_timestamp_opt(event.timestamp.as_deref()),
        });
    }

    entries
}

fn change_line(change: &VisitChange) -> String {
    format!(
        "{} updated: {}",
        prettify_field_name(&change.field),
        display_value(&change.new_value)
    )
}

fn author_of(event: &VisitEvent) -> String {
    event
        .updated_by
        .clone()
        .unwrap_or_else(|| SYSTEM_AUTHOR.to_string())
}
