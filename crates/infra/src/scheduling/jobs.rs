//! Poll jobs binding core services to the scheduler.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use vendora_core::{LocationFeed, VisitStore};

use crate::errors::InfraError;
use crate::scheduling::poller::PollJob;

/// Re-synchronizes the visit mirror on every tick (calendar view cadence).
pub struct VisitSyncJob {
    store: Arc<VisitStore>,
}

impl VisitSyncJob {
    pub fn new(store: Arc<VisitStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PollJob for VisitSyncJob {
    fn name(&self) -> &'static str {
        "visit-sync"
    }

    async fn run(&self) -> Result<(), InfraError> {
        let outcome = self.store.sync().await.map_err(InfraError::from)?;
        debug!(applied = outcome.applied, rejected = outcome.rejected, "visit sync tick");
        Ok(())
    }
}

/// Re-synchronizes the vendor location feed on every tick (map view cadence).
pub struct LocationSyncJob {
    feed: Arc<LocationFeed>,
}

impl LocationSyncJob {
    pub fn new(feed: Arc<LocationFeed>) -> Self {
        Self { feed }
    }
}

#[async_trait]
impl PollJob for LocationSyncJob {
    fn name(&self) -> &'static str {
        "location-sync"
    }

    async fn run(&self) -> Result<(), InfraError> {
        let vendors = self.feed.sync().await.map_err(InfraError::from)?;
        debug!(vendors, "location sync tick");
        Ok(())
    }
}
