// src/integrations/mod.rs
//
// External Integrations Module
//
// - http: the network transport used by the API client
// - players: URL-scheme launchers for external video players

pub mod http;
pub mod players;

pub use http::{ApiRequest, HttpMethod, HttpTransport, Transport, TransportResponse};
pub use players::ExternalPlayer;
