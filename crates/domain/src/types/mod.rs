//! Domain types and models

pub mod location;
pub mod report;
pub mod visit;

pub use location::{ProfileEmbed, VendorLocation, VendorLocationRow};
pub use report::VisitReport;
pub use visit::{Visit, VisitPatch, VisitRow, VisitStatus};
