//! Fixed-interval polling scheduler with explicit lifecycle management.
//!
//! Replaces the implicit effect-cleanup timer of the original views: the
//! task's lifetime is explicitly scoped, started on view-activate and
//! cancelled on view-deactivate. Join handles are tracked, cancellation is
//! explicit, and every job execution is wrapped in a timeout.
//!
//! The period is fixed: no backoff, no jitter, no adaptation to job duration.
//! A failing job is logged and the loop continues on the next tick.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use async_trait::async_trait;
//! use vendora_infra::observability::PerformanceMetrics;
//! use vendora_infra::scheduling::{PollJob, PollScheduler, PollSchedulerConfig, SchedulerResult};
//!
//! struct NoopJob;
//!
//! #[async_trait]
//! impl PollJob for NoopJob {
//!     fn name(&self) -> &'static str {
//!         "noop"
//!     }
//!
//!     async fn run(&self) -> Result<(), vendora_infra::InfraError> {
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> SchedulerResult<()> {
//! let metrics = Arc::new(PerformanceMetrics::new());
//! let mut scheduler = PollScheduler::with_config(
//!     PollSchedulerConfig { interval: Duration::from_secs(5), ..Default::default() },
//!     Arc::new(NoopJob),
//!     metrics,
//! );
//!
//! scheduler.start().await?;
//! // ... view is active ...
//! scheduler.stop().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::InfraError;
use crate::observability::{MetricsResult, PerformanceMetrics};
use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Trait representing a unit of periodic work.
#[async_trait]
pub trait PollJob: Send + Sync {
    /// Stable job name for logging.
    fn name(&self) -> &'static str;

    /// Execute one poll tick.
    async fn run(&self) -> Result<(), InfraError>;
}

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for a polling scheduler
#[derive(Debug, Clone)]
pub struct PollSchedulerConfig {
    /// Fixed period between ticks
    pub interval: Duration,
    /// Timeout applied to a single job execution
    pub job_timeout: Duration,
    /// Timeout for awaiting the task join handle on stop
    pub join_timeout: Duration,
}

impl Default for PollSchedulerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            job_timeout: Duration::from_secs(30),
            join_timeout: Duration::from_secs(5),
        }
    }
}

/// Polling scheduler with explicit lifecycle management.
///
/// Guarantees a single active task per instance: a second `start` is
/// rejected, and `stop` joins the task before returning so no tick can fire
/// after it resolves.
pub struct PollScheduler {
    job: Arc<dyn PollJob>,
    config: PollSchedulerConfig,
    cancellation: CancellationToken,
    task_handle: TaskHandle,
    metrics: Arc<PerformanceMetrics>,
}

impl PollScheduler {
    /// Create a scheduler with the default configuration.
    pub fn new(job: Arc<dyn PollJob>, metrics: Arc<PerformanceMetrics>) -> Self {
        Self::with_config(PollSchedulerConfig::default(), job, metrics)
    }

    /// Create a scheduler with a custom configuration.
    pub fn with_config(
        config: PollSchedulerConfig,
        job: Arc<dyn PollJob>,
        metrics: Arc<PerformanceMetrics>,
    ) -> Self {
        Self {
            job,
            config,
            cancellation: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
            metrics,
        }
    }

    /// Start the scheduler, spawning the polling task.
    ///
    /// # Errors
    ///
    /// Returns error if the scheduler is already running
    #[instrument(skip(self), fields(job = self.job.name()))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        // Fresh token so the scheduler supports restart after stop
        self.cancellation = CancellationToken::new();

        let job = Arc::clone(&self.job);
        let config = self.config.clone();
        let cancel = self.cancellation.clone();
        let metrics = Arc::clone(&self.metrics);

        let handle = tokio::spawn(async move {
            Self::poll_loop(job, config, cancel, metrics).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!(interval_secs = self.config.interval.as_secs_f64(), "poll scheduler started");
        log_metric(self.metrics.record_call(), "scheduler.poll.start");

        Ok(())
    }

    /// Stop the scheduler gracefully.
    ///
    /// Cancels the polling task and awaits completion; after this resolves no
    /// further tick fires.
    ///
    /// # Errors
    ///
    /// Returns error if the scheduler is not running
    #[instrument(skip(self), fields(job = self.job.name()))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|source| SchedulerError::Timeout { duration: join_timeout, source })??;
        }

        info!("poll scheduler stopped");
        log_metric(self.metrics.record_call(), "scheduler.poll.stop");

        Ok(())
    }

    /// Check if the scheduler has an active task that hasn't finished.
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }

    /// Background polling loop
    async fn poll_loop(
        job: Arc<dyn PollJob>,
        config: PollSchedulerConfig,
        cancel: CancellationToken,
        metrics: Arc<PerformanceMetrics>,
    ) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(job = job.name(), "poll loop cancelled");
                    break;
                }
                _ = tokio::time::sleep(config.interval) => {
                    log_metric(metrics.record_call(), "scheduler.poll.tick");
                    let started = Instant::now();

                    match tokio::time::timeout(config.job_timeout, job.run()).await {
                        Ok(Ok(())) => {
                            log_metric(
                                metrics.record_fetch_time(started.elapsed()),
                                "scheduler.poll.duration",
                            );
                            debug!(job = job.name(), "poll tick finished");
                        }
                        Ok(Err(err)) => {
                            log_metric(metrics.record_fetch_error(), "scheduler.poll.error");
                            error!(job = job.name(), error = %err, "poll tick failed");
                        }
                        Err(_) => {
                            log_metric(metrics.record_fetch_timeout(), "scheduler.poll.timeout");
                            warn!(
                                job = job.name(),
                                timeout_secs = config.job_timeout.as_secs(),
                                "poll tick timed out"
                            );
                        }
                    }
                }
            }
        }
    }
}

fn log_metric(result: MetricsResult<()>, metric: &'static str) {
    if let Err(err) = result {
        warn!(metric = metric, error = ?err, "failed to record scheduler metric");
    }
}

/// Ensure the polling task is cancelled when dropped
impl Drop for PollScheduler {
    fn drop(&mut self) {
        // Best-effort cleanup; stop() is the supported path
        if !self.cancellation.is_cancelled() && self.is_running() {
            warn!(job = self.job.name(), "PollScheduler dropped while running; cancelling");
            self.cancellation.cancel();
        }
    }
}
