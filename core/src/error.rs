//! Error types for the warehousing API client.
//!
//! # Design
//! Failures fall into four groups. Configuration errors are detected before
//! any byte leaves the process. Transport errors wrap whatever the HTTP stack
//! reported. Protocol errors carry the `ErrorRecord` built from a response
//! whose status is 300 or above. Decoding errors come from the resource layer
//! when a success body does not match the expected shape.

use std::error::Error as StdError;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Status, status line and raw body of a failed exchange.
///
/// `detail` is always the literal response text; structured JSON error
/// bodies are not unpacked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status} - {title}")]
pub struct ErrorRecord {
    pub status: u16,
    pub title: String,
    pub detail: String,
}

/// Errors returned by `Client` and the resource endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base URL is not absolute or its path lacks a trailing slash.
    #[error("malformed base url, it must be absolute and contain a trailing slash")]
    MalformedBaseUrl,

    /// The client was built without a `Config`.
    #[error("client configuration is missing")]
    MissingConfig,

    #[error("wms code must not be empty")]
    MissingWmsCode,

    #[error("customer code must not be empty")]
    MissingCustomerCode,

    /// Username or password is empty; no login exchange was attempted.
    #[error("username and password must not be empty")]
    MissingCredentials,

    #[error("you must provide a non-empty authentication key")]
    EmptyAuthKey,

    /// The relative path could not be resolved against the base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(#[from] url::ParseError),

    /// The exchange failed below HTTP (DNS, TLS, connect, timeout, body read).
    #[error("httperror: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with a status of 300 or above.
    #[error(transparent)]
    Http(#[from] ErrorRecord),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl ApiError {
    /// Wrap a lower-level failure as a transport error.
    pub fn transport<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ApiError::Transport(Box::new(err))
    }

    /// True for the fail-fast group detected before any network call.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ApiError::MalformedBaseUrl
                | ApiError::MissingConfig
                | ApiError::MissingWmsCode
                | ApiError::MissingCustomerCode
                | ApiError::MissingCredentials
                | ApiError::EmptyAuthKey
        )
    }

    /// HTTP status of a protocol error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(record) => Some(record.status),
            _ => None,
        }
    }
}
