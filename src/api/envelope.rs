// src/api/envelope.rs
//
// The uniform wrapper every server route answers with.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Application-level code meaning "success".
pub const SUCCESS_CODE: i32 = 0;

/// `{ "code": 0, "msg": null, "data": ... }`
///
/// `data` is only meaningful when `code == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(rename = "msg", alias = "message")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload.
    ///
    /// On success `data` is returned as is, `None` included. Otherwise the
    /// envelope's message (or `default_message` when it has none) becomes an
    /// `ApiError` carrying the envelope's code.
    pub fn into_result(self, default_message: &str) -> ApiResult<Option<T>> {
        if self.is_success() {
            return Ok(self.data);
        }

        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_message.to_string());

        Err(ApiError::new(message, self.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DEFAULT: &str = "Failed to load episodes";

    fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Envelope<T> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_returns_data() {
        let envelope: Envelope<Vec<i32>> = decode(json!({"code": 0, "msg": null, "data": [1, 2]}));
        assert_eq!(envelope.into_result(DEFAULT).unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_success_keeps_empty_and_null_data() {
        let empty: Envelope<Vec<i32>> = decode(json!({"code": 0, "msg": null, "data": []}));
        assert_eq!(empty.into_result(DEFAULT).unwrap(), Some(vec![]));

        let null: Envelope<Vec<i32>> = decode(json!({"code": 0, "msg": null, "data": null}));
        assert_eq!(null.into_result(DEFAULT).unwrap(), None);

        let missing: Envelope<String> = decode(json!({"code": 0}));
        assert_eq!(missing.into_result(DEFAULT).unwrap(), None);
    }

    #[test]
    fn test_failure_uses_envelope_message() {
        let envelope: Envelope<Vec<i32>> =
            decode(json!({"code": 1003, "msg": "bangumi 9 not found", "data": [1]}));
        let err = envelope.into_result(DEFAULT).unwrap_err();
        assert_eq!(err, ApiError::new("bangumi 9 not found", 1003));
    }

    #[test]
    fn test_failure_without_message_uses_default() {
        let envelope: Envelope<()> = decode(json!({"code": -1, "msg": null, "data": null}));
        let err = envelope.into_result(DEFAULT).unwrap_err();
        assert_eq!(err.message, DEFAULT);
        assert_eq!(err.code, -1);
        assert_eq!(err.http_status, None);

        let blank: Envelope<()> = decode(json!({"code": 5, "msg": ""}));
        assert_eq!(blank.into_result(DEFAULT).unwrap_err().message, DEFAULT);
    }

    #[test]
    fn test_message_alias_and_wire_name() {
        let envelope: Envelope<()> = decode(json!({"code": 2, "message": "quota exceeded"}));
        assert_eq!(envelope.message.as_deref(), Some("quota exceeded"));

        let wire = serde_json::to_value(Envelope::<()> {
            code: 2,
            message: Some("quota exceeded".to_string()),
            data: None,
        })
        .unwrap();
        assert_eq!(wire, json!({"code": 2, "msg": "quota exceeded", "data": null}));
    }
}
