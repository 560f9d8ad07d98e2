// src/api/mod.rs
//
// Domain API client and the envelope it decodes.

pub mod client;
pub mod envelope;


pub use client::{messages, ApiClient};
pub use envelope::{Envelope, SUCCESS_CODE};
