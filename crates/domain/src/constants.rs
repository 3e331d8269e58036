//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Polling cadence
pub const VISIT_POLL_INTERVAL_SECS: u64 = 5;
pub const LOCATION_POLL_INTERVAL_SECS: u64 = 30;

// Calendar display
//
// Visit end times are never persisted; the calendar derives them by adding
// this fixed duration to the scheduled start.
pub const VISIT_SLOT_DURATION_SECS: i64 = 3600;

// Remote store
pub const VISITS_TABLE: &str = "visits";
pub const VENDOR_LOCATIONS_TABLE: &str = "vendor_locations";

// Fallback display name when a location row carries no profile
pub const UNKNOWN_VENDOR_NAME: &str = "Vendedor";
