// src/lib.rs
// bangumi-client - typed client for a bangumi subscription server
//
// Architecture:
// - Transport: moves requests and raw bodies, nothing else
// - API: one typed operation per server route, envelopes decoded in one place
// - Errors: every failure normalized once, notified once, then propagated
// - Stores: selection (year/season) and snackbar state, shared via Arc

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;

// ============================================================================
// CLIENT LAYER
// ============================================================================

pub mod api;
pub mod application;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Records
// ============================================================================

pub use domain::{
    Bangumi,
    DownloadStatus,
    DownloadTask,
    Episode,
    Metrics,
    Paginated,
    Period,
    QueryBangumiParams,
    QueryDownloadTask,
    Season,
    SelectOption,
    ServerSettings,
    SubscribeParams,
    SubscribeStatus,
    TmdbMetadata,
    Torrent,
    UpdateMdbParams,
};

// ============================================================================
// PUBLIC API - Errors and Config
// ============================================================================

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ConfigError, TransportError, UNKNOWN_ERROR_CODE};

// ============================================================================
// PUBLIC API - Client, Stores, Integrations
// ============================================================================

pub use api::{ApiClient, Envelope};
pub use application::{
    AppState, ErrorNormalizer, Notification, Notifier, SnackbarOptions, SnackbarStore,
};
pub use integrations::{ExternalPlayer, HttpTransport, Transport};
pub use services::{LatestPeriodSource, SelectionService, SelectionState};

pub use application::commands;
