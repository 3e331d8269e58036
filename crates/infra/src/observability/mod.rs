//! Observability infrastructure for metrics and tracing
//!
//! Record methods return `MetricsResult<()>` for future extensibility
//! (cardinality limits, quotas), but currently always succeed.

pub mod metrics;

pub use metrics::{MetricsError, MetricsResult, PerformanceMetrics};
