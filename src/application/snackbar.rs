// src/application/snackbar.rs
//
// In-process notification sink: the state behind a single snackbar widget.
// Each notification replaces the previous one.

use serde::Serialize;
use std::sync::{PoisonError, RwLock};

use super::notifier::{
    Notification, NotificationColor, NotificationLocation, Notifier, DEFAULT_TIMEOUT_MS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnackbarState {
    pub show: bool,
    pub text: String,
    pub color: NotificationColor,
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
    pub location: NotificationLocation,
}

impl Default for SnackbarState {
    fn default() -> Self {
        Self {
            show: false,
            text: String::new(),
            color: NotificationColor::Success,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            location: NotificationLocation::TopRight,
        }
    }
}

/// What a caller may ask for; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnackbarOptions {
    pub text: String,
    pub color: Option<NotificationColor>,
    pub timeout_ms: Option<u64>,
    pub location: Option<NotificationLocation>,
}

impl SnackbarOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl From<Notification> for SnackbarOptions {
    fn from(n: Notification) -> Self {
        Self {
            text: n.text,
            color: Some(n.color),
            timeout_ms: Some(n.timeout_ms),
            location: Some(n.location),
        }
    }
}

#[derive(Debug, Default)]
pub struct SnackbarStore {
    state: RwLock<SnackbarState>,
}

impl SnackbarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, options: SnackbarOptions) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.text = options.text;
        state.color = options.color.unwrap_or(NotificationColor::Success);
        // a zero timeout counts as unset
        state.timeout_ms = options
            .timeout_ms
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        state.location = options.location.unwrap_or(NotificationLocation::TopRight);
        state.show = true;
    }

    pub fn dismiss(&self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .show = false;
    }

    pub fn snapshot(&self) -> SnackbarState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for SnackbarStore {
    fn notify(&self, notification: Notification) {
        self.show(notification.into());
    }
}
