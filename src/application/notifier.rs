// src/application/notifier.rs
//
// Contract between the error pipeline and whatever shows messages to the user.

use serde::{Deserialize, Serialize};

/// Display time used when none is given.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationColor {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLocation {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "bottom right")]
    BottomRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
}

/// One transient message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub color: NotificationColor,
    pub location: NotificationLocation,
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
}

impl Notification {
    /// The notification raised for every failed API operation.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: NotificationColor::Error,
            location: NotificationLocation::TopRight,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Receives notifications. Fire-and-forget: nothing is returned.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_notification_wire_shape() {
        let value = serde_json::to_value(Notification::error("Failed to load calendar")).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Failed to load calendar",
                "color": "error",
                "location": "top right",
                "timeout": 3000
            })
        );
    }
}
