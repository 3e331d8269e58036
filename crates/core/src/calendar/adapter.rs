//! Calendar adapter and the visit edit-buffer workflow.

use std::sync::Arc;

use tracing::debug;
use vendora_domain::{Result, VendoraError, Visit, VisitPatch, VisitStatus};

use crate::calendar::events::CalendarEvent;
use crate::visits::{SyncOutcome, VisitStore};

/// Derives the displayed event list from the visit mirror and hosts the
/// detail/status-edit interaction.
///
/// An optional vendor filter narrows the derived events to one salesperson;
/// admin views leave it unset.
pub struct CalendarAdapter {
    store: Arc<VisitStore>,
    vendor_filter: Option<String>,
}

impl CalendarAdapter {
    pub fn new(store: Arc<VisitStore>) -> Self {
        Self { store, vendor_filter: None }
    }

    /// Restrict derived events to visits owned by `vendor_id`.
    pub fn with_vendor_filter(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_filter = Some(vendor_id.into());
        self
    }

    /// Derive the current display list from the mirror.
    pub fn events(&self) -> Vec<CalendarEvent> {
        let visits = match &self.vendor_filter {
            Some(vendor_id) => self.store.visits_by_vendor(vendor_id),
            None => self.store.visits(),
        };
        visits.into_iter().map(CalendarEvent::from_visit).collect()
    }

    /// Open a detail view for the event identified by `visit_id`.
    ///
    /// The selection carries an edit buffer seeded with the visit's current
    /// status and notes; nothing is written through until
    /// [`confirm`](Self::confirm).
    ///
    /// # Errors
    ///
    /// Returns `VendoraError::NotFound` when the visit is not in the mirror.
    pub fn select(&self, visit_id: &str) -> Result<VisitSelection> {
        self.store
            .get(visit_id)
            .map(VisitSelection::new)
            .ok_or_else(|| VendoraError::NotFound(format!("visit not in mirror: {visit_id}")))
    }

    /// Write the selection's edit buffer through to the store, then trigger
    /// an out-of-band synchronization so consistency does not depend on the
    /// next poll tick.
    ///
    /// Issues exactly one update and exactly one sync. On failure the
    /// selection's buffer is untouched, so the caller can retry or cancel
    /// explicitly.
    pub async fn confirm(&self, selection: &VisitSelection) -> Result<SyncOutcome> {
        let patch = selection.patch();
        self.store.update_visit(selection.visit_id(), &patch).await?;
        let outcome = self.store.sync().await?;
        debug!(visit_id = selection.visit_id(), "visit edit confirmed");
        Ok(outcome)
    }
}

/// Detail-view state for one selected visit.
///
/// Holds the edit buffer locally; `cancel` restores it from the visit's
/// last-known values, `patch` renders it for write-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitSelection {
    visit: Visit,
    status: VisitStatus,
    notes: String,
}

impl VisitSelection {
    fn new(visit: Visit) -> Self {
        let status = visit.status;
        let notes = visit.notes.clone();
        Self { visit, status, notes }
    }

    pub fn visit(&self) -> &Visit {
        &self.visit
    }

    pub fn visit_id(&self) -> &str {
        &self.visit.id
    }

    pub fn status(&self) -> VisitStatus {
        self.status
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_status(&mut self, status: VisitStatus) {
        self.status = status;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// True when the buffer differs from the selected visit.
    pub fn is_dirty(&self) -> bool {
        self.status != self.visit.status || self.notes != self.visit.notes
    }

    /// Discard edits: restore the buffer from the originally selected
    /// visit's last-known values.
    pub fn cancel(&mut self) {
        self.status = self.visit.status;
        self.notes = self.visit.notes.clone();
    }

    /// Render the buffer as a partial update. Both fields are always sent,
    /// mirroring the detail-dialog submit.
    pub fn patch(&self) -> VisitPatch {
        VisitPatch { status: Some(self.status), notes: Some(self.notes.clone()) }
    }
}
