//! Visit store commands

use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use vendora_core::SyncOutcome;
use vendora_domain::{Result, Visit, VisitPatch};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Snapshot of the full visit mirror.
pub async fn get_visits(ctx: &Arc<AppContext>) -> Result<Vec<Visit>> {
    let start = Instant::now();
    let visits = ctx.visit_store.visits();
    log_command_execution("visits::get_visits", start.elapsed(), true);
    Ok(visits)
}

/// The subset of the mirror owned by `vendor_id`.
pub async fn get_visits_by_vendor(ctx: &Arc<AppContext>, vendor_id: &str) -> Result<Vec<Visit>> {
    let start = Instant::now();
    let visits = ctx.visit_store.visits_by_vendor(vendor_id);
    log_command_execution("visits::get_visits_by_vendor", start.elapsed(), true);
    Ok(visits)
}

/// Force an out-of-band synchronization with the remote store.
pub async fn sync_visits(ctx: &Arc<AppContext>) -> Result<SyncOutcome> {
    let start = Instant::now();
    let result = ctx.visit_store.sync().await;
    log_command_execution("visits::sync_visits", start.elapsed(), result.is_ok());
    result
}

/// Write a partial update through to the remote row and trigger a fresh
/// synchronization to reconcile the mirror.
pub async fn update_visit(ctx: &Arc<AppContext>, id: &str, patch: VisitPatch) -> Result<()> {
    let start = Instant::now();

    let result = async {
        ctx.visit_store.update_visit(id, &patch).await?;
        ctx.visit_store.sync().await?;
        Ok(())
    }
    .await;

    if result.is_ok() {
        info!(visit_id = id, "visit updated and reconciled");
    }
    log_command_execution("visits::update_visit", start.elapsed(), result.is_ok());
    result
}
