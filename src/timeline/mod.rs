//! Patient visit timeline — projection of the append-only visit change
//! log into display-ready structures.
//!
//! Two pure operations: [`project_timeline`] turns the ordered event list
//! into chronological entries (synthetic creation entry first);
//! [`render_field_view`] turns one event plus the known-field schema into
//! an ordered field view with change highlighting. Both are recomputed
//! from the full event list on every call — nothing here caches, mutates,
//! or reorders.

mod format;
mod project;
mod render;
mod types;

pub use format::*;
pub use project::*;
pub use render::*;
pub use types::*;

use thiserror::Error;

/// Errors from timeline lookups.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Requested event index is outside the fetched timeline.
    #[error("no event at index {index} (timeline has {len} events)")]
    EventNotFound { index: usize, len: usize },
}

// ── Tests ──────────────────────────────────────────────────────────────────
