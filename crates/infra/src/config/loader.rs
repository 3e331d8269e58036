//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `VENDORA_REMOTE_URL`: Base URL of the hosted platform
//! - `VENDORA_REMOTE_API_KEY`: API key for the hosted session
//! - `VENDORA_REMOTE_TIMEOUT`: Request timeout in seconds (optional)
//! - `VENDORA_REMOTE_MAX_RETRIES`: Max HTTP attempts (optional)
//! - `VENDORA_VISIT_POLL_INTERVAL`: Visit sync period in seconds
//! - `VENDORA_LOCATION_POLL_INTERVAL`: Location sync period in seconds
//! - `VENDORA_POLLING_ENABLED`: Whether polling is armed (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./vendora.json` or `./vendora.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use vendora_domain::{Config, PollingConfig, RemoteStoreConfig, Result, VendoraError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `VendoraError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `VENDORA_REMOTE_URL`, `VENDORA_REMOTE_API_KEY`, and both poll intervals
/// must be present; timeout, retry count, and the polling switch fall back to
/// defaults.
///
/// # Errors
/// Returns `VendoraError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let base_url = env_var("VENDORA_REMOTE_URL")?;
    let api_key = env_var("VENDORA_REMOTE_API_KEY")?;
    let timeout_seconds =
        env_parsed("VENDORA_REMOTE_TIMEOUT", defaults.remote.timeout_seconds)?;
    let max_retries = env_parsed("VENDORA_REMOTE_MAX_RETRIES", defaults.remote.max_retries)?;

    let visit_interval_seconds = env_var("VENDORA_VISIT_POLL_INTERVAL").and_then(|s| {
        s.parse::<u64>()
            .map_err(|e| VendoraError::Config(format!("Invalid visit poll interval: {e}")))
    })?;
    let location_interval_seconds = env_var("VENDORA_LOCATION_POLL_INTERVAL").and_then(|s| {
        s.parse::<u64>()
            .map_err(|e| VendoraError::Config(format!("Invalid location poll interval: {e}")))
    })?;
    let enabled = env_bool("VENDORA_POLLING_ENABLED", true);

    Ok(Config {
        remote: RemoteStoreConfig { base_url, api_key, timeout_seconds, max_retries },
        polling: PollingConfig { visit_interval_seconds, location_interval_seconds, enabled },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `VendoraError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(VendoraError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            VendoraError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| VendoraError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| VendoraError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| VendoraError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(VendoraError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, up to two parent levels, and the
/// executable directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("vendora.json"),
            cwd.join("vendora.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.json"));
            candidates.push(exe_dir.join("config.toml"));
            candidates.push(exe_dir.join("vendora.json"));
            candidates.push(exe_dir.join("vendora.toml"));
        }
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| VendoraError::Config(format!("Missing environment variable: {name}")))
}

fn env_parsed<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| VendoraError::Config(format!("Invalid value for {name}: {e}"))),
        Err(_) => Ok(default),
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
