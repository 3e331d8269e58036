//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{LOCATION_POLL_INTERVAL_SECS, VISIT_POLL_INTERVAL_SECS};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub remote: RemoteStoreConfig,
    pub polling: PollingConfig,
}

/// Remote table-store configuration
///
/// The API key authenticates the hosted session; establishing that session is
/// an external concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Base URL of the hosted platform (e.g. `https://xyz.supabase.co`)
    pub base_url: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
}

/// Polling driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    pub visit_interval_seconds: u64,
    pub location_interval_seconds: u64,
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: RemoteStoreConfig {
                base_url: "http://localhost:54321".to_string(),
                api_key: String::new(),
                timeout_seconds: 30,
                max_retries: 3,
            },
            polling: PollingConfig {
                visit_interval_seconds: VISIT_POLL_INTERVAL_SECS,
                location_interval_seconds: LOCATION_POLL_INTERVAL_SECS,
                enabled: true,
            },
        }
    }
}
