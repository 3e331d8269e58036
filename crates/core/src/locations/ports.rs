//! Port interfaces for the vendor location feed

use async_trait::async_trait;
use vendora_domain::{Result, VendorLocation};

/// A full fetch of the remote `vendor_locations` table.
#[derive(Debug, Clone, Default)]
pub struct LocationBatch {
    /// Rows in remote order (newest first).
    pub locations: Vec<VendorLocation>,
    /// Rows skipped by validation (unparsable coordinates or timestamps).
    pub rejected: usize,
}

/// Trait for reading vendor location rows from the remote store
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Fetch all location rows, ordered by timestamp descending.
    async fn fetch_all(&self) -> Result<LocationBatch>;
}
