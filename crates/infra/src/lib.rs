//! # Vendora Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The remote table-store client (PostgREST-style REST)
//! - Port adapters for visits and vendor locations
//! - Polling schedulers with explicit lifecycle management
//! - Configuration loading
//! - Lightweight performance counters
//!
//! ## Architecture
//! - Implements traits defined in `vendora-core`
//! - Depends on `vendora-domain` and `vendora-core`
//! - Contains all "impure" code (HTTP, environment, clocks)

pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod remote;
pub mod scheduling;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::PerformanceMetrics;
pub use remote::{
    RemoteError, SupabaseClient, SupabaseClientConfig, SupabaseLocationRepository,
    SupabaseVisitRepository,
};
pub use scheduling::{
    LocationSyncJob, PollJob, PollScheduler, PollSchedulerConfig, SchedulerError, SchedulerResult,
    VisitSyncJob,
};
