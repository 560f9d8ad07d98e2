// src/error/types.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code carried by an `ApiError` when neither the backend nor the transport
/// supplied one.
pub const UNKNOWN_ERROR_CODE: i32 = -1;

/// The single failure shape returned by every API operation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message, never empty.
    pub message: String,

    /// Application-level code reported by the backend, or `UNKNOWN_ERROR_CODE`.
    pub code: i32,

    /// HTTP status of the failed response, when the failure came from one.
    pub http_status: Option<u16>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
            http_status: None,
        }
    }

    /// Error with the sentinel code and no status.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(message, UNKNOWN_ERROR_CODE)
    }
}

/// Failures raised by a `Transport` before any envelope is looked at.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success HTTP status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Vec<u8> },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when the failure carried a response.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            TransportError::Status { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_builder() {
            TransportError::InvalidRequest(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

pub type ApiResult<T> = Result<T, ApiError>;
