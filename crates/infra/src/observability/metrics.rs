//! Performance counters for polling and remote fetches.
//!
//! Thread-safe atomic counters sized to this codebase: call counts, fetch
//! timings, errors, and timeouts. Readers get aggregate values; there is no
//! exporter wiring here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by metric accessors
#[derive(Debug, Error)]
pub enum MetricsError {
    /// No samples recorded yet
    #[error("no data recorded")]
    EmptyData,
}

/// Result type for metric operations
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Performance metrics for tracking infrastructure operations
#[derive(Debug, Default)]
pub struct PerformanceMetrics {
    calls: AtomicU64,
    fetch_errors: AtomicU64,
    fetch_timeouts: AtomicU64,
    fetch_time_total_ms: AtomicU64,
    fetch_time_samples: AtomicU64,
    last_fetch_ms: AtomicU64,
}

impl PerformanceMetrics {
    /// Create new metrics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation invocation.
    pub fn record_call(&self) -> MetricsResult<()> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Record how long a fetch took.
    pub fn record_fetch_time(&self, duration: Duration) -> MetricsResult<()> {
        let millis = duration.as_millis().min(u128::from(u64::MAX)) as u64;
        self.fetch_time_total_ms.fetch_add(millis, Ordering::Relaxed);
        self.fetch_time_samples.fetch_add(1, Ordering::Relaxed);
        self.last_fetch_ms.store(millis, Ordering::Relaxed);
        Ok(())
    }

    /// Record a failed fetch.
    pub fn record_fetch_error(&self) -> MetricsResult<()> {
        self.fetch_errors.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Record a fetch that hit its timeout.
    pub fn record_fetch_timeout(&self) -> MetricsResult<()> {
        self.fetch_timeouts.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    pub fn total_calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn fetch_errors(&self) -> u64 {
        self.fetch_errors.load(Ordering::Relaxed)
    }

    pub fn fetch_timeouts(&self) -> u64 {
        self.fetch_timeouts.load(Ordering::Relaxed)
    }

    /// Mean fetch time over all samples.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::EmptyData` if no fetch times were recorded.
    pub fn avg_fetch_time_ms(&self) -> MetricsResult<u64> {
        let samples = self.fetch_time_samples.load(Ordering::Relaxed);
        if samples == 0 {
            return Err(MetricsError::EmptyData);
        }
        Ok(self.fetch_time_total_ms.load(Ordering::Relaxed) / samples)
    }

    /// Duration of the most recent fetch.
    pub fn last_fetch_time_ms(&self) -> MetricsResult<u64> {
        if self.fetch_time_samples.load(Ordering::Relaxed) == 0 {
            return Err(MetricsError::EmptyData);
        }
        Ok(self.last_fetch_ms.load(Ordering::Relaxed))
    }
}
