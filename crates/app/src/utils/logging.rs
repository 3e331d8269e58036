//! Structured logging helpers for the command layer.

use std::time::Duration;

use tracing::{info, warn};
use vendora_domain::VendoraError;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` controls verbosity; defaults to `info`. Safe to call more than
/// once; later calls are ignored.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Log the outcome of a command execution with structured fields.
///
/// The helper keeps the command wrappers concise and the field names
/// consistent. Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `VendoraError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &VendoraError) -> &'static str {
    match error {
        VendoraError::RemoteStore(_) => "remote_store",
        VendoraError::Config(_) => "config",
        VendoraError::Network(_) => "network",
        VendoraError::Auth(_) => "auth",
        VendoraError::NotFound(_) => "not_found",
        VendoraError::InvalidInput(_) => "invalid_input",
        VendoraError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&VendoraError::Network("offline".into())), "network");
        assert_eq!(error_label(&VendoraError::NotFound("v1".into())), "not_found");
    }
}
