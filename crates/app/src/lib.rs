//! Application shell: ports, session state and the services that wire
//! domain outcomes to side effects (role persistence, notifications,
//! navigation, ledger calls).
//!
//! Everything here is presentation-local; there is no HTTP surface and
//! no real backend.

pub mod dashboard;
pub mod invoicing;
pub mod lookup;
pub mod memory;
pub mod onboarding;
pub mod ports;
pub mod session;
pub mod wallet;

pub use dashboard::{DashboardView, view_for};
pub use invoicing::{InvoiceService, IssueError};
pub use lookup::{LookupError, LookupService};
pub use memory::{InMemoryRoleStore, RecordingNavigator, RecordingNotifier, TracingNotifier};
pub use onboarding::OnboardingService;
pub use ports::{
    DASHBOARD_ROUTE, Navigator, Notification, NotificationKind, NotificationSink,
    ONBOARDING_ROUTE, ROLE_KEY, RoleStore,
};
pub use session::UserSession;
pub use wallet::{WalletConnector, WalletError, WalletProvider, WalletStatus};
