// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between the CLI and the API client / selection store
// - Owns the user-facing side of failures (notifier, snackbar)
// - AppState is built once and shared by every command

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod notifier;
pub mod snackbar;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorNormalizer, Failure};
pub use notifier::{Notification, NotificationColor, NotificationLocation, Notifier};
pub use snackbar::{SnackbarOptions, SnackbarState, SnackbarStore};
pub use state::AppState;
