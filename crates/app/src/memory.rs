//! In-memory port implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{Navigator, Notification, NotificationKind, NotificationSink, RoleStore};

/// In-memory role store, the stand-in for browser-local storage.
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryRoleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoleStore for InMemoryRoleStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// Navigator that records visited routes, in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().map(|routes| routes.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str) {
        tracing::info!(route, "navigating");
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route.to_string());
        }
    }
}

/// Sink that renders notifications as log lines.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(title = %notification.title, "{}", notification.message);
            }
            NotificationKind::Error => {
                tracing::warn!(title = %notification.title, "{}", notification.message);
            }
        }
    }
}

/// Sink that retains notifications for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications
            .lock()
            .ok()
            .and_then(|n| n.last().cloned())
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ROLE_KEY;

    #[test]
    fn role_store_round_trips() {
        let store = InMemoryRoleStore::new();
        assert_eq!(store.get(ROLE_KEY), None);

        store.set(ROLE_KEY, "buyer");
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("buyer"));

        store.set(ROLE_KEY, "officer");
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("officer"));
    }

    #[test]
    fn navigator_records_routes_in_order() {
        let navigator = RecordingNavigator::new();
        navigator.go_to("/onboarding");
        navigator.go_to("/dashboard");
        assert_eq!(navigator.routes(), ["/onboarding", "/dashboard"]);
    }

    #[test]
    fn recording_notifier_keeps_the_latest_last() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::error("Oops", "first"));
        notifier.notify(Notification::success("Done", "second"));
        assert_eq!(notifier.last().unwrap().title, "Done");
        assert_eq!(notifier.notifications().len(), 2);
    }
}
