//! Reporting commands

use std::sync::Arc;
use std::time::Instant;

use vendora_domain::{Result, VisitReport};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Status breakdown, per-vendor counts, and conversion rate over the current
/// visit mirror.
pub async fn get_visit_report(ctx: &Arc<AppContext>) -> Result<VisitReport> {
    let start = Instant::now();
    let report = ctx.reports.visit_report();
    log_command_execution("reports::get_visit_report", start.elapsed(), true);
    Ok(report)
}
