//! Careline — patient visit timeline reconstruction.
//!
//! The coordination backend keeps an append-only change log for every
//! patient visit: each record carries the instant of the change, the actor
//! who made it, the set of field-level changes, and a full snapshot of the
//! visit as of that record. This crate consumes that log and projects it
//! into display-ready structures:
//!
//! - [`timeline::project_timeline`] — the ordered event list becomes a
//!   chronological list of human-readable entries, starting with a
//!   synthetic "Patient Visit Created" entry.
//! - [`timeline::render_field_view`] — one event plus the known-field
//!   schema becomes an ordered field view with change highlighting.
//! - [`client::TimelineClient`] — the async fetch for the event history,
//!   with stale-response protection for superseded requests.
//!
//! Projection is pure and synchronous; nothing is cached or mutated. The
//! only asynchronous boundary is the HTTP fetch.

pub mod client;
pub mod config;
pub mod models;
pub mod timeline;

pub use client::{FetchError, RequestToken, RequestTracker, TimelineClient};
pub use models::{
    default_visit_fields, FieldKind, FieldValue, KnownField, VisitChange, VisitEvent,
    VisitSnapshot, VisitTimeline,
};
pub use timeline::{
    discharge_notice, event_at, project_timeline, render_field_view, FieldView, TimelineEntry,
    TimelineError,
};
