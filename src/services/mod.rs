// src/services/mod.rs
//
// Services Module - Client-side state built on top of the API client

pub mod selection_service;

#[cfg(test)]
mod selection_service_tests;

pub use selection_service::{
    LatestPeriodSource,
    SelectionService,
    SelectionState,
    EARLIEST_YEAR,
};
