// src/application/error_handling.rs
//
// Error Normalization for API Operations
//
// ARCHITECTURE:
// - Every failure becomes exactly one ApiError
// - Every failure is shown to the user exactly once, through the Notifier
// - Notification happens before the error is handed back
// - Callers propagate the error; they never display it again

use log::warn;
use serde::Deserialize;
use std::sync::Arc;

use super::notifier::{Notification, Notifier};
use crate::error::{ApiError, ApiResult, TransportError, UNKNOWN_ERROR_CODE};

/// Anything that can go wrong during an API operation, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The transport gave up, possibly after receiving an error response.
    Transport {
        status: Option<u16>,
        message: String,
        body: Option<Vec<u8>>,
    },

    /// Any other failure that carries a message (business errors, bad JSON).
    Message(String),

    /// A failure with nothing usable attached.
    Opaque,
}

impl From<TransportError> for Failure {
    fn from(err: TransportError) -> Self {
        Failure::Transport {
            status: err.status(),
            body: err.body().map(<[u8]>::to_vec),
            message: err.to_string(),
        }
    }
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        Failure::Message(err.message)
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        Failure::Message(err.to_string())
    }
}

/// Envelope-shaped error body sent along with non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<i32>,
    #[serde(alias = "message")]
    msg: Option<String>,
}

impl ErrorBody {
    fn parse(body: Option<&[u8]>) -> Self {
        body.and_then(|b| serde_json::from_slice(b).ok())
            .unwrap_or_default()
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

/// Turns failures into `ApiError`s and reports them to the user.
#[derive(Clone)]
pub struct ErrorNormalizer {
    notifier: Arc<dyn Notifier>,
}

impl ErrorNormalizer {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Classify a failure. Pure: no notification is sent.
    pub fn normalize(failure: Failure, default_message: &str) -> ApiError {
        match failure {
            Failure::Transport {
                status,
                message,
                body,
            } => {
                let body = ErrorBody::parse(body.as_deref());
                let message = non_empty(body.msg)
                    .or_else(|| non_empty(Some(message)))
                    .unwrap_or_else(|| default_message.to_string());
                // a zero code in an error body carries no information
                let code = body
                    .code
                    .filter(|c| *c != 0)
                    .unwrap_or(UNKNOWN_ERROR_CODE);

                ApiError {
                    message,
                    code,
                    http_status: status,
                }
            }

            Failure::Message(message) => ApiError::unknown(
                non_empty(Some(message)).unwrap_or_else(|| default_message.to_string()),
            ),

            Failure::Opaque => ApiError::unknown(default_message),
        }
    }

    /// Normalize, notify once, then fail. Never returns `Ok`.
    pub fn fail<T>(&self, failure: impl Into<Failure>, default_message: &str) -> ApiResult<T> {
        let error = Self::normalize(failure.into(), default_message);

        warn!(
            "API operation failed: {} (code {}, status {:?})",
            error.message, error.code, error.http_status
        );
        self.notifier.notify(Notification::error(error.message.clone()));

        Err(error)
    }
}

impl std::fmt::Debug for ErrorNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorNormalizer").finish_non_exhaustive()
    }
}
