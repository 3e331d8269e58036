//! Shared fixtures for app command tests.

use std::sync::Arc;

use serde_json::json;
use vendora_domain::{Config, PollingConfig, RemoteStoreConfig};
use vendora_lib::AppContext;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Context wired against a mock REST surface. Polling is disabled unless a
/// test opts in; view activation still performs its immediate sync.
pub fn context_for(server: &MockServer, polling_enabled: bool, visit_interval: u64) -> Arc<AppContext> {
    let config = Config {
        remote: RemoteStoreConfig {
            base_url: server.uri(),
            api_key: "anon-key".to_string(),
            timeout_seconds: 5,
            max_retries: 1,
        },
        polling: PollingConfig {
            visit_interval_seconds: visit_interval,
            location_interval_seconds: 30,
            enabled: polling_enabled,
        },
    };

    Arc::new(AppContext::new(config).unwrap())
}

pub fn visits_body() -> serde_json::Value {
    json!([
        {
            "id": "v1",
            "vendor_id": "A",
            "client_name": "Mercado Central",
            "location": "Cuiabá",
            "scheduled_date": "2025-03-10T14:00:00Z",
            "status": "scheduled",
            "notes": ""
        },
        {
            "id": "v2",
            "vendor_id": "B",
            "client_name": "Padaria Sol",
            "location": "Sinop",
            "scheduled_date": "2025-03-10T16:30:00Z",
            "status": "in_negotiation",
            "notes": "volta amanhã"
        }
    ])
}

pub async fn mount_visits(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/visits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(visits_body()))
        .mount(server)
        .await;
}

pub async fn mount_locations(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/vendor_locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "vendor_id": "A",
                "latitude": "-12.6819",
                "longitude": "-55.5106",
                "timestamp": "2025-03-10T14:00:00Z",
                "profiles": {"full_name": "Ana Souza"}
            }
        ])))
        .mount(server)
        .await;
}
