//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use vendora_domain::VendoraError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub VendoraError);

impl From<InfraError> for VendoraError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<VendoraError> for InfraError {
    fn from(value: VendoraError) -> Self {
        InfraError(value)
    }
}

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for InfraError {}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → VendoraError */
/* -------------------------------------------------------------------------- */

fn http_error_into_domain(err: HttpError) -> VendoraError {
    if err.is_timeout() {
        return VendoraError::Network("HTTP request timed out".into());
    }

    if err.is_connect() {
        return VendoraError::Network("HTTP connection failure".into());
    }

    if let Some(status) = err.status() {
        let code = status.as_u16();
        let message =
            format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

        return match code {
            401 | 403 => VendoraError::Auth(message),
            404 => VendoraError::NotFound(message),
            400..=499 => VendoraError::InvalidInput(message),
            500..=599 => VendoraError::Network(message),
            _ => VendoraError::Network(message),
        };
    }

    if err.is_decode() {
        return VendoraError::RemoteStore(format!("failed to decode response body: {err}"));
    }

    VendoraError::Network(err.to_string())
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(http_error_into_domain(value))
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → VendoraError */
/* -------------------------------------------------------------------------- */

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(VendoraError::Config(format!("invalid URL: {value}")))
    }
}
