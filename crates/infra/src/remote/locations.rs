//! Supabase-backed implementation of the LocationRepository port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};
use vendora_core::{LocationBatch, LocationRepository};
use vendora_domain::constants::VENDOR_LOCATIONS_TABLE;
use vendora_domain::{Result, VendorLocationRow};

use super::client::SupabaseClient;

/// Projection with the embedded profile carrying the vendor's display name.
const LOCATION_SELECT: &str = "vendor_id,latitude,longitude,timestamp,profiles(full_name)";

/// Supabase implementation of LocationRepository
pub struct SupabaseLocationRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseLocationRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationRepository for SupabaseLocationRepository {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<LocationBatch> {
        let rows: Vec<VendorLocationRow> = self
            .client
            .fetch_rows(VENDOR_LOCATIONS_TABLE, LOCATION_SELECT, Some("timestamp.desc"))
            .await
            .map_err(vendora_domain::VendoraError::from)?;

        let mut batch = LocationBatch::default();
        for row in rows {
            match row.into_location() {
                Ok(location) => batch.locations.push(location),
                Err(err) => {
                    warn!(error = %err, "rejected vendor location row");
                    batch.rejected += 1;
                }
            }
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::remote::client::SupabaseClientConfig;

    use super::*;

    #[tokio::test]
    async fn fetch_all_orders_by_timestamp_and_validates_rows() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/vendor_locations"))
            .and(query_param("select", LOCATION_SELECT))
            .and(query_param("order", "timestamp.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "vendor_id": "A",
                    "latitude": "-12.6819",
                    "longitude": "-55.5106",
                    "timestamp": "2025-03-10T14:00:00Z",
                    "profiles": {"full_name": "Ana Souza"}
                },
                {
                    "vendor_id": "B",
                    "latitude": "somewhere",
                    "longitude": "-55.0",
                    "timestamp": "2025-03-10T13:00:00Z",
                    "profiles": null
                }
            ])))
            .mount(&server)
            .await;

        let config = SupabaseClientConfig {
            base_url: server.uri(),
            api_key: "anon-key".to_string(),
            ..Default::default()
        };
        let repository =
            SupabaseLocationRepository::new(Arc::new(SupabaseClient::with_config(config).unwrap()));

        let batch = repository.fetch_all().await.unwrap();
        assert_eq!(batch.locations.len(), 1);
        assert_eq!(batch.rejected, 1);
        assert_eq!(batch.locations[0].vendor_name, "Ana Souza");
    }
}
