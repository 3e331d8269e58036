//! Aggregated visit reporting types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::visit::VisitStatus;

/// Management report over the current visit mirror.
///
/// Derived on demand; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitReport {
    pub total_visits: usize,
    /// Count per status, keyed by the wire label. Every status in the closed
    /// enumeration is present, zero or not.
    pub by_status: BTreeMap<String, usize>,
    /// Visit count per vendor id.
    pub by_vendor: BTreeMap<String, usize>,
    /// Share of visits that closed with a purchase, in `[0.0, 1.0]`.
    pub conversion_rate: f64,
}

impl VisitReport {
    /// Empty report (no visits in the mirror).
    pub fn empty() -> Self {
        let by_status =
            VisitStatus::ALL.iter().map(|status| (status.as_str().to_string(), 0)).collect();
        Self { total_visits: 0, by_status, by_vendor: BTreeMap::new(), conversion_rate: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_lists_every_status() {
        let report = VisitReport::empty();
        assert_eq!(report.by_status.len(), VisitStatus::ALL.len());
        assert!(report.by_status.values().all(|count| *count == 0));
        assert_eq!(report.conversion_rate, 0.0);
    }
}
