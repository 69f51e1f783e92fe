//! Error types for the core library.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur when talking to the backend or preparing a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request failed before a usable response arrived (connect, timeout, decode).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend error ({status}): {body}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// Template lookup miss.
    #[error("Template not found: {0}")]
    NotFound(String),

    /// A required field was missing; no request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Backend URL could not be used as a base for endpoint paths.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Returns true for transport failures (connection refused, timeout, undecodable body).
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
