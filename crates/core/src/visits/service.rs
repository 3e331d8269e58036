//! Visit store service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, warn};
use vendora_domain::{Result, Visit, VisitPatch};

use super::ports::VisitRepository;

/// Result of one synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Number of visits now in the mirror.
    pub applied: usize,
    /// Rows the remote returned that failed validation and were skipped.
    pub rejected: usize,
    pub synced_at: DateTime<Utc>,
}

/// In-memory mirror of the remote `visits` table.
///
/// Owns the authoritative in-session collection and mediates all reads and
/// writes to the remote source. The mirror is replaced wholesale on each
/// sync; the lock is never held across an await, so overlapping syncs settle
/// last-response-wins.
pub struct VisitStore {
    repository: Arc<dyn VisitRepository>,
    visits: RwLock<Vec<Visit>>,
    last_sync: RwLock<Option<SyncOutcome>>,
}

impl VisitStore {
    /// Create a store over the given remote repository. The mirror starts
    /// empty until the first [`sync`](Self::sync).
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self { repository, visits: RwLock::new(Vec::new()), last_sync: RwLock::new(None) }
    }

    /// Fetch the full remote collection and replace the mirror.
    ///
    /// Idempotent: repeated calls converge to the same state absent
    /// concurrent external writes. On failure the mirror is untouched and the
    /// error is surfaced to the caller.
    pub async fn sync(&self) -> Result<SyncOutcome> {
        let batch = self.repository.fetch_all().await?;

        if batch.rejected > 0 {
            warn!(rejected = batch.rejected, "skipped invalid visit rows during sync");
        }

        let outcome = SyncOutcome {
            applied: batch.visits.len(),
            rejected: batch.rejected,
            synced_at: Utc::now(),
        };

        *self.visits.write() = batch.visits;
        *self.last_sync.write() = Some(outcome.clone());

        debug!(applied = outcome.applied, "visit mirror replaced");
        Ok(outcome)
    }

    /// Snapshot of the current mirror.
    pub fn visits(&self) -> Vec<Visit> {
        self.visits.read().clone()
    }

    /// Pure filter: the subset of the mirror owned by `vendor_id`.
    pub fn visits_by_vendor(&self, vendor_id: &str) -> Vec<Visit> {
        self.visits.read().iter().filter(|visit| visit.vendor_id == vendor_id).cloned().collect()
    }

    /// Look up a single visit in the mirror.
    pub fn get(&self, id: &str) -> Option<Visit> {
        self.visits.read().iter().find(|visit| visit.id == id).cloned()
    }

    /// Write a partial update through to the remote row, then apply it to the
    /// local mirror optimistically. Callers are expected to trigger a fresh
    /// [`sync`](Self::sync) to reconcile.
    pub async fn update_visit(&self, id: &str, patch: &VisitPatch) -> Result<()> {
        self.repository.update(id, patch).await?;

        let mut visits = self.visits.write();
        if let Some(visit) = visits.iter_mut().find(|visit| visit.id == id) {
            patch.apply_to(visit);
        }

        debug!(visit_id = id, "visit updated");
        Ok(())
    }

    /// Outcome of the most recent successful sync, if any.
    pub fn last_sync(&self) -> Option<SyncOutcome> {
        self.last_sync.read().clone()
    }
}
