// src/integrations/http/transport.rs
//
// The seam between the API client and the network.
//
// A Transport knows nothing about envelopes: it moves a request out and a
// status plus raw body back. Non-2xx answers are failures.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// POST with a JSON body.
    pub fn post<B: Serialize + ?Sized>(
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// Adds a query parameter. `None` and empty values are left out.
    pub fn query(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }
}

/// A 2xx answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_skips_empty_values() {
        let request = ApiRequest::get("/calendar")
            .query("season", None)
            .query("name", Some(""))
            .query("page", Some("2"));
        assert_eq!(request.query, vec![("page".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_post_carries_json_body() {
        let request = ApiRequest::post("/downloads", &json!({"offset": 0})).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(json!({"offset": 0})));
    }

    #[test]
    fn test_response_json() {
        let response = TransportResponse::new(200, r#"{"code":0}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["code"], 0);
        assert!(TransportResponse::new(200, "<html>").json::<serde_json::Value>().is_err());
    }
}
