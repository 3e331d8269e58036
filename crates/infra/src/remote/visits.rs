//! Supabase-backed implementation of the VisitRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};
use vendora_core::{VisitBatch, VisitRepository};
use vendora_domain::constants::VISITS_TABLE;
use vendora_domain::{Result, VisitPatch, VisitRow};

use super::client::SupabaseClient;

/// Supabase implementation of VisitRepository.
///
/// Wire rows are validated on the way in: a row with a malformed
/// `scheduled_date` is logged, skipped, and counted rather than poisoning the
/// whole batch.
pub struct SupabaseVisitRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseVisitRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VisitRepository for SupabaseVisitRepository {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<VisitBatch> {
        let rows: Vec<VisitRow> = self
            .client
            .fetch_rows(VISITS_TABLE, "*", None)
            .await
            .map_err(vendora_domain::VendoraError::from)?;

        let mut batch = VisitBatch::default();
        for row in rows {
            match row.into_visit() {
                Ok(visit) => batch.visits.push(visit),
                Err(err) => {
                    warn!(error = %err, "rejected visit row");
                    batch.rejected += 1;
                }
            }
        }

        Ok(batch)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: &VisitPatch) -> Result<()> {
        self.client
            .update_row(VISITS_TABLE, id, patch)
            .await
            .map_err(vendora_domain::VendoraError::from)
    }
}
