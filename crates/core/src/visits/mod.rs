//! Visit store - in-memory mirror of the remote `visits` table.

pub mod ports;
pub mod service;

pub use service::{SyncOutcome, VisitStore};
