//! Session-scoped view of the persisted role.

use std::sync::Arc;

use blockgst_onboarding::Role;

use crate::ports::{ROLE_KEY, RoleStore};

/// Reads the persisted role at render time.
///
/// Absent or unrecognized store contents fall back to `Role::Seller`;
/// the store is never "repaired", the default is applied on read.
#[derive(Clone)]
pub struct UserSession {
    store: Arc<dyn RoleStore>,
}

impl UserSession {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    pub fn current_role(&self) -> Role {
        self.store
            .get(ROLE_KEY)
            .and_then(|raw| raw.parse::<Role>().ok())
            .unwrap_or_default()
    }

    /// Write-through role switch (the demo's role switcher).
    pub fn switch_role(&self, role: Role) {
        self.store.set(ROLE_KEY, role.as_str());
    }
}
