//! Vendor location feed service.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};
use vendora_domain::{Result, VendorLocation};

use super::ports::LocationRepository;

/// In-memory mirror of the latest known position per vendor.
///
/// The remote table is append-only; the feed reduces it to one row per
/// vendor, keeping the newest timestamp. Polled on a 30-second cadence while
/// the map view is active, independently of the visit store.
pub struct LocationFeed {
    repository: Arc<dyn LocationRepository>,
    locations: RwLock<Vec<VendorLocation>>,
}

impl LocationFeed {
    pub fn new(repository: Arc<dyn LocationRepository>) -> Self {
        Self { repository, locations: RwLock::new(Vec::new()) }
    }

    /// Fetch the remote rows and replace the mirror with the reduced
    /// latest-per-vendor set.
    pub async fn sync(&self) -> Result<usize> {
        let batch = self.repository.fetch_all().await?;

        if batch.rejected > 0 {
            warn!(rejected = batch.rejected, "skipped invalid location rows during sync");
        }

        let reduced = reduce_latest_per_vendor(batch.locations);
        let count = reduced.len();
        *self.locations.write() = reduced;

        debug!(vendors = count, "vendor location mirror replaced");
        Ok(count)
    }

    /// Latest known location per vendor, sorted by vendor id for stable
    /// display.
    pub fn locations(&self) -> Vec<VendorLocation> {
        self.locations.read().clone()
    }
}

/// Keep only the newest row per vendor, regardless of input order.
fn reduce_latest_per_vendor(rows: Vec<VendorLocation>) -> Vec<VendorLocation> {
    let mut latest: HashMap<String, VendorLocation> = HashMap::new();
    for row in rows {
        match latest.get(&row.vendor_id) {
            Some(existing) if existing.timestamp >= row.timestamp => {}
            _ => {
                latest.insert(row.vendor_id.clone(), row);
            }
        }
    }

    let mut reduced: Vec<VendorLocation> = latest.into_values().collect();
    reduced.sort_by(|a, b| a.vendor_id.cmp(&b.vendor_id));
    reduced
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::super::ports::LocationBatch;
    use super::*;

    struct FixedRepo {
        batch: LocationBatch,
    }

    #[async_trait]
    impl LocationRepository for FixedRepo {
        async fn fetch_all(&self) -> Result<LocationBatch> {
            Ok(LocationBatch { locations: self.batch.locations.clone(), rejected: self.batch.rejected })
        }
    }

    fn location(vendor_id: &str, hour: u32) -> VendorLocation {
        VendorLocation {
            vendor_id: vendor_id.into(),
            vendor_name: format!("vendor-{vendor_id}"),
            latitude: -12.68,
            longitude: -55.51,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn keeps_only_newest_row_per_vendor() {
        let repo = FixedRepo {
            batch: LocationBatch {
                locations: vec![location("a", 9), location("b", 8), location("a", 11)],
                rejected: 0,
            },
        };
        let feed = LocationFeed::new(Arc::new(repo));

        let count = feed.sync().await.unwrap();
        assert_eq!(count, 2);

        let locations = feed.locations();
        assert_eq!(locations.len(), 2);
        let a = locations.iter().find(|l| l.vendor_id == "a").unwrap();
        assert_eq!(a.timestamp, Utc.with_ymd_and_hms(2025, 3, 10, 11, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn reduction_does_not_depend_on_input_order() {
        let newest_first = vec![location("a", 11), location("a", 9)];
        let oldest_first = vec![location("a", 9), location("a", 11)];

        assert_eq!(
            reduce_latest_per_vendor(newest_first),
            reduce_latest_per_vendor(oldest_first)
        );
    }
}
