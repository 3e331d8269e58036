//! Vendora - vendor CRM core service
//!
//! Headless entry point: builds the application context, activates the
//! calendar and map views so both polling drivers run, and waits for Ctrl-C.

use std::sync::Arc;

use tracing::{info, warn};
use vendora_lib::{commands, utils, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    utils::logging::init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    let config = vendora_infra::config::load()?;
    let ctx = Arc::new(AppContext::new(config)?);

    match commands::activate_calendar_view(&ctx).await? {
        Some(outcome) => {
            info!(visits = outcome.applied, rejected = outcome.rejected, "calendar view active");
        }
        None => info!("calendar view active with stale mirror"),
    }

    match commands::activate_map_view(&ctx).await? {
        Some(vendors) => info!(vendors, "map view active"),
        None => info!("map view active with stale feed"),
    }

    info!("vendora running; press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    ctx.shutdown().await?;
    Ok(())
}
