//! Shared fixtures for core integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use vendora_core::{VisitBatch, VisitRepository};
use vendora_domain::{Result, VendoraError, Visit, VisitPatch, VisitStatus};

/// Mock remote `visits` table with call counters.
///
/// Updates are applied to the backing rows so a follow-up fetch observes the
/// write, like the hosted store would.
pub struct RecordingVisitRepository {
    rows: Mutex<Vec<Visit>>,
    pub fetch_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub last_patch: Mutex<Option<(String, VisitPatch)>>,
}

impl RecordingVisitRepository {
    pub fn with_rows(rows: Vec<Visit>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fetch_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            last_patch: Mutex::new(None),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Simulate an external delete of a remote row.
    pub fn remove_row(&self, id: &str) {
        self.rows.lock().unwrap().retain(|visit| visit.id != id);
    }

    pub fn updates(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisitRepository for RecordingVisitRepository {
    async fn fetch_all(&self) -> Result<VisitBatch> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let visits = self.rows.lock().unwrap().clone();
        Ok(VisitBatch { visits, rejected: 0 })
    }

    async fn update(&self, id: &str, patch: &VisitPatch) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let visit = rows
            .iter_mut()
            .find(|visit| visit.id == id)
            .ok_or_else(|| VendoraError::RemoteStore(format!("row not found: {id}")))?;
        patch.apply_to(visit);
        *self.last_patch.lock().unwrap() = Some((id.to_string(), patch.clone()));
        Ok(())
    }
}

pub fn visit(id: &str, vendor_id: &str, status: VisitStatus, notes: &str) -> Visit {
    Visit {
        id: id.into(),
        vendor_id: vendor_id.into(),
        client_name: format!("client-{id}"),
        location: "Cuiabá".into(),
        scheduled_date: Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap(),
        status,
        notes: notes.into(),
    }
}
