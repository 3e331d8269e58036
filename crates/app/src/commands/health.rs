//! Health commands

use std::sync::Arc;
use std::time::Instant;

use vendora_domain::Result;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Check whether the remote table store is reachable and answering.
pub async fn get_remote_health(ctx: &Arc<AppContext>) -> Result<bool> {
    let start = Instant::now();
    let result = ctx.remote.health_check().await.map_err(vendora_domain::VendoraError::from);
    log_command_execution("health::get_remote_health", start.elapsed(), result.is_ok());
    result
}
