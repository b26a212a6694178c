//! Error types for the network client

use crate::api::ApiResponse;
use thiserror::Error;

/// Result type for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised by an API transport
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Not found: {}", .0.text())]
    NotFound(ApiResponse),

    #[error("API error ({}): {}", .0.status, .0.text())]
    Status(ApiResponse),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Network client error types
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Transport error: {0}")]
    Transport(#[from] ApiError),

    #[error("Network not found: {name}")]
    NetworkNotFound { name: String, response: ApiResponse },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid network name: {0:?}")]
    InvalidName(String),
}

impl NetworkError {
    /// Whether the remote service reported the network as absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::NetworkNotFound { .. })
    }

    /// Map a 404 from the transport to [`NetworkError::NetworkNotFound`]
    pub(crate) fn from_lookup(name: &str, err: ApiError) -> Self {
        match err {
            ApiError::NotFound(response) => NetworkError::NetworkNotFound {
                name: name.to_string(),
                response,
            },
            other => NetworkError::Transport(other),
        }
    }
}
