//! Dashboard selection.

use blockgst_onboarding::Role;

use crate::session::UserSession;

/// Which dashboard a session renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Seller,
    Buyer,
    Officer,
}

/// Pick the dashboard for the session's persisted role.
pub fn view_for(session: &UserSession) -> DashboardView {
    match session.current_role() {
        Role::Seller => DashboardView::Seller,
        Role::Buyer => DashboardView::Buyer,
        Role::Officer => DashboardView::Officer,
    }
}
