//! Application context - dependency injection container
//!
//! The context is the explicit application state object: it owns the config,
//! the services, and the two polling drivers. View lifecycle is modeled
//! directly. Activating a view performs one immediate synchronization and
//! arms the matching poller; deactivating stops it. The pollers are the only
//! mutable members and sit behind async mutexes so commands can share the
//! context through an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use vendora_core::{
    CalendarAdapter, LocationFeed, ReportService, SyncOutcome, VisitStore,
};
use vendora_domain::{Config, Result, VendoraError};
use vendora_infra::observability::PerformanceMetrics;
use vendora_infra::remote::{SupabaseClient, SupabaseLocationRepository, SupabaseVisitRepository};
use vendora_infra::scheduling::{
    LocationSyncJob, PollScheduler, PollSchedulerConfig, SchedulerError, VisitSyncJob,
};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub remote: Arc<SupabaseClient>,
    pub visit_store: Arc<VisitStore>,
    pub location_feed: Arc<LocationFeed>,
    pub reports: Arc<ReportService>,
    pub metrics: Arc<PerformanceMetrics>,

    // Polling drivers, armed per view
    calendar_poller: Mutex<PollScheduler>,
    map_poller: Mutex<PollScheduler>,
}

impl AppContext {
    /// Build the full dependency graph from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the remote client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let remote = Arc::new(
            SupabaseClient::with_config((&config.remote).into())
                .map_err(VendoraError::from)?,
        );

        let visit_store = Arc::new(VisitStore::new(Arc::new(SupabaseVisitRepository::new(
            Arc::clone(&remote),
        ))));
        let location_feed = Arc::new(LocationFeed::new(Arc::new(
            SupabaseLocationRepository::new(Arc::clone(&remote)),
        )));
        let reports = Arc::new(ReportService::new(Arc::clone(&visit_store)));

        let metrics = Arc::new(PerformanceMetrics::new());

        let calendar_poller = PollScheduler::with_config(
            PollSchedulerConfig {
                interval: Duration::from_secs(config.polling.visit_interval_seconds.max(1)),
                ..Default::default()
            },
            Arc::new(VisitSyncJob::new(Arc::clone(&visit_store))),
            Arc::clone(&metrics),
        );
        let map_poller = PollScheduler::with_config(
            PollSchedulerConfig {
                interval: Duration::from_secs(config.polling.location_interval_seconds.max(1)),
                ..Default::default()
            },
            Arc::new(LocationSyncJob::new(Arc::clone(&location_feed))),
            Arc::clone(&metrics),
        );

        info!("application context initialized");

        Ok(Self {
            config,
            remote,
            visit_store,
            location_feed,
            reports,
            metrics,
            calendar_poller: Mutex::new(calendar_poller),
            map_poller: Mutex::new(map_poller),
        })
    }

    /// Build a calendar adapter for one view, optionally scoped to a vendor.
    pub fn calendar(&self, vendor_filter: Option<String>) -> CalendarAdapter {
        let adapter = CalendarAdapter::new(Arc::clone(&self.visit_store));
        match vendor_filter {
            Some(vendor_id) => adapter.with_vendor_filter(vendor_id),
            None => adapter,
        }
    }

    /// Calendar view mounted: one immediate synchronization, then arm the
    /// fixed-interval poller for the lifetime of the view.
    ///
    /// A failed initial sync does not keep the view from mounting: the timer
    /// is armed regardless and the mirror stays stale until the next tick
    /// reconciles it. `None` signals that the initial sync failed.
    pub async fn activate_calendar_view(&self) -> Result<Option<SyncOutcome>> {
        self.arm(&self.calendar_poller).await?;

        match self.visit_store.sync().await {
            Ok(outcome) => Ok(Some(outcome)),
            Err(err) => {
                warn!(error = %err, "initial visit sync failed; serving stale mirror");
                Ok(None)
            }
        }
    }

    /// Calendar view unmounted: guaranteed timer teardown.
    pub async fn deactivate_calendar_view(&self) -> Result<()> {
        self.disarm(&self.calendar_poller).await
    }

    /// Map view mounted: immediate location sync, then the 30-second poller.
    /// `None` signals that the initial sync failed (stale pins until the next
    /// tick).
    pub async fn activate_map_view(&self) -> Result<Option<usize>> {
        self.arm(&self.map_poller).await?;

        match self.location_feed.sync().await {
            Ok(vendors) => Ok(Some(vendors)),
            Err(err) => {
                warn!(error = %err, "initial location sync failed; serving stale feed");
                Ok(None)
            }
        }
    }

    /// Map view unmounted.
    pub async fn deactivate_map_view(&self) -> Result<()> {
        self.disarm(&self.map_poller).await
    }

    /// Stop every polling driver; used on shutdown.
    pub async fn shutdown(&self) -> Result<()> {
        self.deactivate_calendar_view().await?;
        self.deactivate_map_view().await?;
        info!("application context shut down");
        Ok(())
    }

    async fn arm(&self, poller: &Mutex<PollScheduler>) -> Result<()> {
        if !self.config.polling.enabled {
            debug!("polling disabled by configuration");
            return Ok(());
        }

        let mut guard = poller.lock().await;
        match guard.start().await {
            Ok(()) => Ok(()),
            // Re-activating an already-mounted view keeps the single timer
            Err(SchedulerError::AlreadyRunning) => {
                debug!("poller already armed");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn disarm(&self, poller: &Mutex<PollScheduler>) -> Result<()> {
        let mut guard = poller.lock().await;
        match guard.stop().await {
            Ok(()) => Ok(()),
            Err(SchedulerError::NotRunning) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
