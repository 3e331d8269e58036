//! Management report derivation over the visit mirror.

use std::sync::Arc;

use vendora_domain::{VisitReport, VisitStatus};

use crate::visits::VisitStore;

/// Pure aggregation over the visit store; no I/O, recomputed on demand.
pub struct ReportService {
    store: Arc<VisitStore>,
}

impl ReportService {
    pub fn new(store: Arc<VisitStore>) -> Self {
        Self { store }
    }

    /// Status breakdown, per-vendor counts, and conversion rate for the
    /// current mirror.
    pub fn visit_report(&self) -> VisitReport {
        let visits = self.store.visits();
        if visits.is_empty() {
            return VisitReport::empty();
        }

        let mut report = VisitReport::empty();
        report.total_visits = visits.len();

        for visit in &visits {
            if let Some(count) = report.by_status.get_mut(visit.status.as_str()) {
                *count += 1;
            }
            *report.by_vendor.entry(visit.vendor_id.clone()).or_insert(0) += 1;
        }

        let completed = report
            .by_status
            .get(VisitStatus::CompletedPurchase.as_str())
            .copied()
            .unwrap_or(0);
        report.conversion_rate = completed as f64 / visits.len() as f64;

        report
    }
}
