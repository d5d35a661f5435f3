// ============================================================================
// ERRORS - Error taxonomy for the API client
// ============================================================================

use thiserror::Error;

/// Why a single HTTP exchange failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors surfaced by [`crate::services::ProductApi`] operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Sign-in rejected (bad credentials) or unreachable
    #[error("sign-in failed: {0}")]
    Auth(RequestFailure),

    /// Session check failed or network down
    #[error("session check failed: {0}")]
    Session(RequestFailure),

    /// Product list could not be fetched
    #[error("product list failed: {0}")]
    Fetch(RequestFailure),
}

impl ApiError {
    pub fn failure(&self) -> &RequestFailure {
        match self {
            ApiError::Auth(failure) | ApiError::Session(failure) | ApiError::Fetch(failure) => {
                failure
            }
        }
    }
}
