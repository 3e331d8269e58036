//! Scheduling infrastructure for the polling drivers
//!
//! The calendar and map views rely on fixed-interval re-synchronization while
//! they are active. Each driver is a [`PollScheduler`] wrapping a
//! [`PollJob`]:
//! - Explicit lifecycle management (start on view-activate, stop on
//!   view-deactivate)
//! - Join handles for spawned tasks
//! - Cancellation token support
//! - Timeout wrapping on job executions
//! - Structured tracing with PerformanceMetrics integration
//!
//! No backoff, no jitter, no visibility suspension: the period is fixed by
//! design and job failures are logged and ignored until the next tick.

pub mod error;
pub mod jobs;
pub mod poller;

pub use error::{SchedulerError, SchedulerResult};
pub use jobs::{LocationSyncJob, VisitSyncJob};
pub use poller::{PollJob, PollScheduler, PollSchedulerConfig};
