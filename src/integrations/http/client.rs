// src/integrations/http/client.rs
//
// reqwest-backed Transport.
//
// RULES:
// - One shared reqwest Client, one timeout for every call
// - Never inspects the envelope
// - No retries

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use std::time::Duration;

use super::transport::{ApiRequest, HttpMethod, Transport, TransportResponse};
use crate::error::TransportError;

pub struct HttpTransport {
    base_url: String,
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url` (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Join the base URL and a request path.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<TransportResponse, TransportError> {
        let url = self.build_url(&request.path);
        debug!("{:?} {}", request.method, url);

        let mut builder = match request.method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => self.http_client.post(&url),
        }
        .header(header::ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            debug!("{} answered {}", url, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(TransportResponse::new(status.as_u16(), body))
    }
}
