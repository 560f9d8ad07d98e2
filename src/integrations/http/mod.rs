// src/integrations/http/mod.rs
//
// HTTP transport: the trait the API client talks to and its reqwest backend.

pub mod client;
pub mod transport;

pub use client::HttpTransport;
pub use transport::{ApiRequest, HttpMethod, Transport, TransportResponse};

#[cfg(test)]
pub use transport::MockTransport;
