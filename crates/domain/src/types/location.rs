//! Vendor location records for the live map feed.
//!
//! Locations arrive from the `vendor_locations` table with string-encoded
//! coordinates and an embedded profile carrying the vendor's display name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_VENDOR_NAME;
use crate::errors::{Result, VendoraError};

/// Last known position of a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorLocation {
    pub vendor_id: String,
    pub vendor_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// Wire representation of a `vendor_locations` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorLocationRow {
    pub vendor_id: String,
    pub latitude: String,
    pub longitude: String,
    pub timestamp: String,
    #[serde(default)]
    pub profiles: Option<ProfileEmbed>,
}

/// Embedded profile fragment joined onto a location row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEmbed {
    #[serde(default)]
    pub full_name: Option<String>,
}

impl VendorLocationRow {
    /// Validate the row and convert it into a domain `VendorLocation`.
    ///
    /// # Errors
    ///
    /// Returns `VendoraError::InvalidInput` when a coordinate is not a finite
    /// number or the timestamp is not parsable.
    pub fn into_location(self) -> Result<VendorLocation> {
        let latitude = parse_coordinate(&self.vendor_id, "latitude", &self.latitude)?;
        let longitude = parse_coordinate(&self.vendor_id, "longitude", &self.longitude)?;

        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|err| {
                VendoraError::InvalidInput(format!(
                    "location for vendor {}: invalid timestamp {:?}: {err}",
                    self.vendor_id, self.timestamp
                ))
            })?;

        let vendor_name = self
            .profiles
            .and_then(|profile| profile.full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_VENDOR_NAME.to_string());

        Ok(VendorLocation {
            vendor_id: self.vendor_id,
            vendor_name,
            latitude,
            longitude,
            timestamp,
        })
    }
}

fn parse_coordinate(vendor_id: &str, field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|err| {
        VendoraError::InvalidInput(format!(
            "location for vendor {vendor_id}: invalid {field} {raw:?}: {err}"
        ))
    })?;
    if !value.is_finite() {
        return Err(VendoraError::InvalidInput(format!(
            "location for vendor {vendor_id}: non-finite {field} {raw:?}"
        )));
    }
    Ok(value)
}
