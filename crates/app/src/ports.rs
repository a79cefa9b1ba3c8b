//! Ports the shell drives side effects through.
//!
//! All three are stubbed in tests and backed by in-memory
//! implementations in [`crate::memory`].

use serde::{Deserialize, Serialize};

/// Storage key the chosen role is persisted under.
pub const ROLE_KEY: &str = "userRole";

/// Dashboard route targeted after onboarding completes.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Onboarding route targeted after a wallet connects.
pub const ONBOARDING_ROUTE: &str = "/onboarding";

/// Process-wide key-value store holding the persisted role.
///
/// No TTL, no schema enforcement; readers deal with absent or
/// unrecognized values themselves.
pub trait RoleStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Fire-and-forget route navigation.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: &str);
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink user-facing notifications are pushed into.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
