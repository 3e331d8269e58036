//! Port interfaces for the visit store
//!
//! These traits define the boundary between core business logic and the
//! remote table store.

use async_trait::async_trait;
use vendora_domain::{Result, Visit, VisitPatch};

/// A full fetch of the remote `visits` table.
///
/// Rows the adapter rejected during validation (malformed timestamps) are
/// skipped and counted, so a single bad row cannot poison the mirror.
#[derive(Debug, Clone, Default)]
pub struct VisitBatch {
    pub visits: Vec<Visit>,
    pub rejected: usize,
}

/// Trait for reading and writing visit rows in the remote store
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Fetch the full current collection of visits.
    async fn fetch_all(&self) -> Result<VisitBatch>;

    /// Apply a partial update to the remote row identified by `id`.
    ///
    /// A nonexistent `id` surfaces as a remote-store error; there is no
    /// client-side existence check and no version check (last writer wins).
    async fn update(&self, id: &str, patch: &VisitPatch) -> Result<()>;
}
