//! Calendar event derivation.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use vendora_domain::constants::VISIT_SLOT_DURATION_SECS;
use vendora_domain::Visit;

/// A time-blocked calendar event derived from a visit.
///
/// The end time is recomputed from the start on every derivation; it is never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub visit: Visit,
}

impl CalendarEvent {
    /// Derive the display event for a visit.
    pub fn from_visit(visit: Visit) -> Self {
        let start = visit.scheduled_date;
        Self {
            id: visit.id.clone(),
            title: visit.client_name.clone(),
            start,
            end: slot_end(start),
            visit,
        }
    }
}

/// Fixed one-hour slot end for a given start.
pub fn slot_end(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::seconds(VISIT_SLOT_DURATION_SECS)
}
