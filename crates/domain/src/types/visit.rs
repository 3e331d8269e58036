//! Visit records and the status enumeration.
//!
//! A `Visit` is a scheduled vendor-client interaction. Records are created by
//! external flows (the agenda feature); this crate only reads, filters, and
//! patches them. Wire rows are kept separate from the domain type so that a
//! malformed `scheduled_date` is rejected with a typed error instead of
//! degrading into an unparseable display value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, VendoraError};

/// Visit lifecycle status.
///
/// Closed enumeration; any status may move to any other. Transition
/// restrictions were considered and intentionally not added.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    InNegotiation,
    CompletedPurchase,
    CompletedNoPurchase,
    Rescheduled,
    Absent,
    Thinking,
}

impl VisitStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 7] = [
        Self::Scheduled,
        Self::InNegotiation,
        Self::CompletedPurchase,
        Self::CompletedNoPurchase,
        Self::Rescheduled,
        Self::Absent,
        Self::Thinking,
    ];

    /// Stable snake_case label, matching the wire encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InNegotiation => "in_negotiation",
            Self::CompletedPurchase => "completed_purchase",
            Self::CompletedNoPurchase => "completed_no_purchase",
            Self::Rescheduled => "rescheduled",
            Self::Absent => "absent",
            Self::Thinking => "thinking",
        }
    }
}

impl std::str::FromStr for VisitStatus {
    type Err = VendoraError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| VendoraError::InvalidInput(format!("unknown visit status: {s}")))
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled vendor-client interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visit {
    /// Unique identifier, immutable after creation. Uniqueness is delegated
    /// to the remote store.
    pub id: String,
    pub vendor_id: String,
    pub client_name: String,
    pub location: String,
    /// Calendar slot start. The slot end is derived, never persisted.
    pub scheduled_date: DateTime<Utc>,
    pub status: VisitStatus,
    pub notes: String,
}

/// Partial update applied to a remote visit row.
///
/// `None` fields are left untouched remotely; last writer wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VisitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VisitPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }

    /// Apply this patch to an in-memory visit (optimistic local mirror).
    pub fn apply_to(&self, visit: &mut Visit) {
        if let Some(status) = self.status {
            visit.status = status;
        }
        if let Some(notes) = &self.notes {
            visit.notes = notes.clone();
        }
    }
}

/// Wire representation of a `visits` row.
///
/// `scheduled_date` arrives as a raw string and is validated on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRow {
    pub id: String,
    pub vendor_id: String,
    pub client_name: String,
    pub location: String,
    pub scheduled_date: String,
    pub status: VisitStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VisitRow {
    /// Validate the row and convert it into a domain `Visit`.
    ///
    /// # Errors
    ///
    /// Returns `VendoraError::InvalidInput` when `scheduled_date` is not a
    /// parsable RFC 3339 timestamp.
    pub fn into_visit(self) -> Result<Visit> {
        let scheduled_date = DateTime::parse_from_rfc3339(&self.scheduled_date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| {
                VendoraError::InvalidInput(format!(
                    "visit {}: invalid scheduled_date {:?}: {err}",
                    self.id, self.scheduled_date
                ))
            })?;

        Ok(Visit {
            id: self.id,
            vendor_id: self.vendor_id,
            client_name: self.client_name,
            location: self.location,
            scheduled_date,
            status: self.status,
            notes: self.notes.unwrap_or_default(),
        })
    }
}
