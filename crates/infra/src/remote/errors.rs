//! Remote-store error types
//!
//! Provides error classification for remote table operations with retry
//! metadata.

use thiserror::Error;
use vendora_domain::VendoraError;

/// Categories of remote errors for retry logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorCategory {
    /// Authentication errors (401, 403) - retry after session refresh
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Store-level errors (row not found, constraint violation)
    Store,
    /// Configuration errors - non-retryable
    Config,
}

/// Remote table-store operation errors
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(std::time::Duration),
}

impl RemoteError {
    /// Get the error category for this error
    pub fn category(&self) -> RemoteErrorCategory {
        match self {
            Self::Auth(_) => RemoteErrorCategory::Authentication,
            Self::RateLimit(_) => RemoteErrorCategory::RateLimit,
            Self::Server(_) => RemoteErrorCategory::Server,
            Self::Client(_) => RemoteErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => RemoteErrorCategory::Network,
            Self::Store(_) => RemoteErrorCategory::Store,
            Self::Config(_) => RemoteErrorCategory::Config,
        }
    }

    /// Check if this error should be retried on a later tick
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            RemoteErrorCategory::Authentication
                | RemoteErrorCategory::RateLimit
                | RemoteErrorCategory::Server
                | RemoteErrorCategory::Network
        )
    }
}

/// Convert from VendoraError to RemoteError
impl From<VendoraError> for RemoteError {
    fn from(err: VendoraError) -> Self {
        match err {
            VendoraError::RemoteStore(message) => Self::Store(message),
            VendoraError::Config(message) => Self::Config(message),
            VendoraError::Network(message) => Self::Network(message),
            VendoraError::Auth(message) => Self::Auth(message),
            VendoraError::NotFound(message) | VendoraError::InvalidInput(message) => {
                Self::Client(message)
            }
            VendoraError::Internal(message) => Self::Server(message),
        }
    }
}

/// Convert back into the domain error at the port boundary
impl From<RemoteError> for VendoraError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Auth(message) => Self::Auth(message),
            RemoteError::Store(message) => Self::RemoteStore(message),
            RemoteError::Config(message) => Self::Config(message),
            RemoteError::Client(message) => Self::InvalidInput(message),
            RemoteError::RateLimit(message)
            | RemoteError::Server(message)
            | RemoteError::Network(message) => Self::Network(message),
            RemoteError::Timeout(duration) => {
                Self::Network(format!("remote call timed out after {duration:?}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_match_variants() {
        assert_eq!(
            RemoteError::Auth("test".to_string()).category(),
            RemoteErrorCategory::Authentication
        );
        assert_eq!(RemoteError::Store("test".to_string()).category(), RemoteErrorCategory::Store);
        assert_eq!(
            RemoteError::Timeout(std::time::Duration::from_secs(5)).category(),
            RemoteErrorCategory::Network
        );
    }

    #[test]
    fn retry_metadata() {
        assert!(RemoteError::Server("test".to_string()).should_retry());
        assert!(RemoteError::Network("test".to_string()).should_retry());
        assert!(!RemoteError::Store("row not found".to_string()).should_retry());
        assert!(!RemoteError::Client("bad request".to_string()).should_retry());
    }

    #[test]
    fn round_trips_to_domain_error() {
        let err: VendoraError = RemoteError::Store("row not found: v1".into()).into();
        assert!(matches!(err, VendoraError::RemoteStore(_)));
    }
}
