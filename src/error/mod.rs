// src/error/mod.rs
//
// Error types shared by every layer.
//
// RULES:
// - ApiError is the only error UI code ever sees
// - TransportError stays below the API client
// - ConfigError is local to config loading

pub mod types;

pub use types::{ApiError, ApiResult, ConfigError, TransportError, UNKNOWN_ERROR_CODE};
