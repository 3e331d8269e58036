//! Calendar view commands

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use vendora_core::SyncOutcome;
use vendora_domain::{Result, VisitStatus};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Calendar event for time-grid display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDto {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub vendor_id: String,
    pub location: String,
    pub status: VisitStatus,
    pub notes: String,
}

/// Detail-view payload for a selected visit, seeded with the edit buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitSelectionDto {
    pub id: String,
    pub client_name: String,
    pub location: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: VisitStatus,
    pub notes: String,
}

/// Calendar view mounted: immediate sync, then the 5-second poller. `None`
/// means the initial sync failed and the mirror is stale until the next tick.
pub async fn activate_calendar_view(ctx: &Arc<AppContext>) -> Result<Option<SyncOutcome>> {
    let start = Instant::now();
    let result = ctx.activate_calendar_view().await;
    log_command_execution("calendar::activate_calendar_view", start.elapsed(), result.is_ok());
    result
}

/// Calendar view unmounted: stop the poller, no tick fires afterwards.
pub async fn deactivate_calendar_view(ctx: &Arc<AppContext>) -> Result<()> {
    let start = Instant::now();
    let result = ctx.deactivate_calendar_view().await;
    log_command_execution("calendar::deactivate_calendar_view", start.elapsed(), result.is_ok());
    result
}

/// Derive the display list, optionally pre-filtered by vendor.
pub async fn get_calendar_events(
    ctx: &Arc<AppContext>,
    vendor_id: Option<String>,
) -> Result<Vec<CalendarEventDto>> {
    let start = Instant::now();

    let events = ctx
        .calendar(vendor_id)
        .events()
        .into_iter()
        .map(|event| CalendarEventDto {
            id: event.id,
            title: event.title,
            start: event.start,
            end: event.end,
            vendor_id: event.visit.vendor_id,
            location: event.visit.location,
            status: event.visit.status,
            notes: event.visit.notes,
        })
        .collect();

    log_command_execution("calendar::get_calendar_events", start.elapsed(), true);
    Ok(events)
}

/// Open the detail view for one event.
pub async fn select_visit(ctx: &Arc<AppContext>, visit_id: &str) -> Result<VisitSelectionDto> {
    let start = Instant::now();

    let result = ctx.calendar(None).select(visit_id).map(|selection| {
        let visit = selection.visit();
        VisitSelectionDto {
            id: visit.id.clone(),
            client_name: visit.client_name.clone(),
            location: visit.location.clone(),
            scheduled_date: visit.scheduled_date,
            status: selection.status(),
            notes: selection.notes().to_string(),
        }
    });

    log_command_execution("calendar::select_visit", start.elapsed(), result.is_ok());
    result
}

/// Confirm the detail-view edit: one write-through update followed by one
/// out-of-band synchronization.
pub async fn confirm_visit_edit(
    ctx: &Arc<AppContext>,
    visit_id: &str,
    status: VisitStatus,
    notes: String,
) -> Result<SyncOutcome> {
    let start = Instant::now();

    let adapter = ctx.calendar(None);
    let result = match adapter.select(visit_id) {
        Ok(mut selection) => {
            selection.set_status(status);
            selection.set_notes(notes);
            adapter.confirm(&selection).await
        }
        Err(err) => Err(err),
    };

    if result.is_ok() {
        info!(visit_id, status = %status, "visit edit confirmed");
    }
    log_command_execution("calendar::confirm_visit_edit", start.elapsed(), result.is_ok());
    result
}
