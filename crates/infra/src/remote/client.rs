//! Supabase REST client for the hosted table store.
//!
//! Speaks the PostgREST dialect: reads are `GET /rest/v1/{table}` with a
//! `select` projection, writes are `PATCH /rest/v1/{table}?id=eq.{id}` with a
//! partial field object. Every call carries the configured API key both as
//! `apikey` and as a bearer token, which is how the hosted session is
//! consumed; establishing that session is an external concern.
//!
//! # Architecture
//!
//! - Uses the shared [`HttpClient`] (no direct reqwest)
//! - Structured tracing with request/response logging
//! - Timeout wrapping on all API calls

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use vendora_domain::RemoteStoreConfig;

use crate::http::HttpClient;

use super::errors::RemoteError;

/// Configuration for the Supabase client
#[derive(Debug, Clone)]
pub struct SupabaseClientConfig {
    /// Base URL of the hosted platform (e.g. `https://xyz.supabase.co`)
    pub base_url: String,
    /// API key consumed as both `apikey` and bearer token
    pub api_key: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Max attempts for transient failures
    pub max_retries: usize,
}

impl Default for SupabaseClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

impl From<&RemoteStoreConfig> for SupabaseClientConfig {
    fn from(config: &RemoteStoreConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            max_retries: config.max_retries,
        }
    }
}

/// Row-oriented query client for the hosted table store.
pub struct SupabaseClient {
    http_client: HttpClient,
    config: SupabaseClientConfig,
}

impl SupabaseClient {
    /// Create a client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn with_config(config: SupabaseClientConfig) -> Result<Self, RemoteError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_retries)
            .build()
            .map_err(|e| RemoteError::Config(format!("failed to build HttpClient: {e}")))?;

        Ok(Self { http_client, config })
    }

    /// Fetch all rows of `table` with the given `select` projection.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn fetch_rows<T>(
        &self,
        table: &str,
        select: &str,
        order: Option<&str>,
    ) -> Result<Vec<T>, RemoteError>
    where
        T: DeserializeOwned,
    {
        let url = self.table_url(table);

        let mut request = self
            .authorized(Method::GET, &url)
            .query(&[("select", select)]);
        if let Some(order) = order {
            request = request.query(&[("order", order)]);
        }

        debug!(url = %url, "fetching rows");
        let response = self.send_request(request).await?;

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| RemoteError::Client(format!("failed to parse rows: {e}")))?;

        debug!(count = rows.len(), "fetched rows");
        Ok(rows)
    }

    /// Apply a partial update to the row of `table` identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Store` when no row matches `id`; the platform
    /// answers a filter with no matches with an empty representation, not a
    /// 404.
    #[instrument(skip(self, patch))]
    pub async fn update_row<P>(&self, table: &str, id: &str, patch: &P) -> Result<(), RemoteError>
    where
        P: Serialize + Sync,
    {
        let url = self.table_url(table);

        let request = self
            .authorized(Method::PATCH, &url)
            .query(&[("id", format!("eq.{id}"))])
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(patch);

        debug!(url = %url, id, "updating row");
        let response = self.send_request(request).await?;

        let updated: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| RemoteError::Client(format!("failed to parse representation: {e}")))?;

        if updated.is_empty() {
            return Err(RemoteError::Store(format!("row not found: {table}/{id}")));
        }

        debug!(id, "row updated");
        Ok(())
    }

    /// Health check for the REST surface.
    ///
    /// # Returns
    ///
    /// `true` if the platform is reachable and answers with a success status.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<bool, RemoteError> {
        let url = format!("{}/rest/v1/", self.config.base_url.trim_end_matches('/'));

        let request = self.authorized(Method::GET, &url);
        let response = tokio::time::timeout(self.config.timeout, self.http_client.send(request))
            .await
            .map_err(|_| RemoteError::Timeout(self.config.timeout))?
            .map_err(RemoteError::from)?;

        if response.status().is_success() {
            debug!("remote store is healthy");
            Ok(true)
        } else {
            warn!(status = %response.status(), "remote store returned non-success status");
            Ok(false)
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorized(&self, method: Method, url: &str) -> RequestBuilder {
        self.http_client
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    async fn send_request(&self, builder: RequestBuilder) -> Result<Response, RemoteError> {
        let response = tokio::time::timeout(self.config.timeout, self.http_client.send(builder))
            .await
            .map_err(|_| RemoteError::Timeout(self.config.timeout))?
            .map_err(RemoteError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(classify_status(status, message))
    }
}

fn classify_status(status: StatusCode, message: String) -> RemoteError {
    let detail = if message.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {message}")
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteError::Auth(detail),
        StatusCode::TOO_MANY_REQUESTS => RemoteError::RateLimit(detail),
        StatusCode::CONFLICT => RemoteError::Store(detail),
        status if status.is_server_error() => RemoteError::Server(detail),
        _ => RemoteError::Client(detail),
    }
}
