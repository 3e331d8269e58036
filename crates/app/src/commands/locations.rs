//! Vendor map commands

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vendora_domain::Result;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Map pin payload for one vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorLocationDto {
    pub vendor_id: String,
    pub vendor_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// Map view mounted: immediate location sync, then the 30-second poller.
/// Returns the number of vendors with an active location, or `None` when the
/// initial sync failed.
pub async fn activate_map_view(ctx: &Arc<AppContext>) -> Result<Option<usize>> {
    let start = Instant::now();
    let result = ctx.activate_map_view().await;
    log_command_execution("locations::activate_map_view", start.elapsed(), result.is_ok());
    result
}

/// Map view unmounted.
pub async fn deactivate_map_view(ctx: &Arc<AppContext>) -> Result<()> {
    let start = Instant::now();
    let result = ctx.deactivate_map_view().await;
    log_command_execution("locations::deactivate_map_view", start.elapsed(), result.is_ok());
    result
}

/// Latest known location per vendor.
pub async fn get_vendor_locations(ctx: &Arc<AppContext>) -> Result<Vec<VendorLocationDto>> {
    let start = Instant::now();

    let locations = ctx
        .location_feed
        .locations()
        .into_iter()
        .map(|location| VendorLocationDto {
            vendor_id: location.vendor_id,
            vendor_name: location.vendor_name,
            latitude: location.latitude,
            longitude: location.longitude,
            timestamp: location.timestamp,
        })
        .collect();

    log_command_execution("locations::get_vendor_locations", start.elapsed(), true);
    Ok(locations)
}
