//! Wallet connection flow.
//!
//! Connection is simulated: a fixed delay, a notification, then a
//! redirect into onboarding. No keys, no signing.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::{Navigator, Notification, NotificationSink, ONBOARDING_ROUTE};

/// Wallet providers offered on the connect page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalletProvider {
    /// Browser extension; only connectable when installed.
    Freighter,
    StellarWallets,
    Albedo,
    /// Not live yet.
    Rabet,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 4] = [
        WalletProvider::Freighter,
        WalletProvider::StellarWallets,
        WalletProvider::Albedo,
        WalletProvider::Rabet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Freighter => "Freighter",
            WalletProvider::StellarWallets => "Stellar Wallets",
            WalletProvider::Albedo => "Albedo",
            WalletProvider::Rabet => "Rabet",
        }
    }
}

/// Availability as shown on the provider card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    Installed,
    NotInstalled,
    Available,
    ComingSoon,
}

/// Connect failures; all recovered by picking another provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("{0} is not installed")]
    NotInstalled(&'static str),

    #[error("{0} support is not live yet")]
    ComingSoon(&'static str),
}

/// Simulated wallet connection.
pub struct WalletConnector {
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    connect_delay: Duration,
    redirect_delay: Duration,
}

impl WalletConnector {
    /// Production-shaped delays: 2 s to connect, 1.5 s before redirect.
    pub fn new(notifier: Arc<dyn NotificationSink>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_delays(
            notifier,
            navigator,
            Duration::from_secs(2),
            Duration::from_millis(1500),
        )
    }

    pub fn with_delays(
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
        connect_delay: Duration,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            notifier,
            navigator,
            connect_delay,
            redirect_delay,
        }
    }

    /// Provider status as probed at render time. Freighter's depends on
    /// whether the extension is present.
    pub fn status(provider: WalletProvider, freighter_installed: bool) -> WalletStatus {
        match provider {
            WalletProvider::Freighter if freighter_installed => WalletStatus::Installed,
            WalletProvider::Freighter => WalletStatus::NotInstalled,
            WalletProvider::StellarWallets | WalletProvider::Albedo => WalletStatus::Available,
            WalletProvider::Rabet => WalletStatus::ComingSoon,
        }
    }

    /// Connect to a provider.
    ///
    /// A coming-soon provider is rejected up front (its card is not
    /// clickable). A missing Freighter extension is discovered after the
    /// connection attempt and reported; no navigation happens. Otherwise:
    /// success notification, redirect delay, then onboarding.
    pub async fn connect(
        &self,
        provider: WalletProvider,
        freighter_installed: bool,
    ) -> Result<(), WalletError> {
        if Self::status(provider, freighter_installed) == WalletStatus::ComingSoon {
            return Err(WalletError::ComingSoon(provider.name()));
        }

        tokio::time::sleep(self.connect_delay).await;

        if Self::status(provider, freighter_installed) == WalletStatus::NotInstalled {
            self.notifier.notify(Notification::error(
                "Freighter Not Installed",
                "Please install Freighter extension first.",
            ));
            return Err(WalletError::NotInstalled(provider.name()));
        }

        self.notifier.notify(Notification::success(
            "Wallet Connected!",
            format!("{} connected successfully.", provider.name()),
        ));

        tokio::time::sleep(self.redirect_delay).await;
        self.navigator.go_to(ONBOARDING_ROUTE);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{RecordingNavigator, RecordingNotifier};
    use crate::ports::NotificationKind;

    fn connector() -> (WalletConnector, Arc<RecordingNotifier>, Arc<RecordingNavigator>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let connector = WalletConnector::with_delays(
            notifier.clone(),
            navigator.clone(),
            Duration::ZERO,
            Duration::ZERO,
        );
        (connector, notifier, navigator)
    }

    #[tokio::test]
    async fn connecting_albedo_redirects_into_onboarding() {
        let (connector, notifier, navigator) = connector();
        connector
            .connect(WalletProvider::Albedo, false)
            .await
            .unwrap();

        let last = notifier.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert!(last.message.contains("Albedo"));
        assert_eq!(navigator.routes(), [ONBOARDING_ROUTE]);
    }

    #[tokio::test]
    async fn missing_freighter_extension_fails_without_navigation() {
        let (connector, notifier, navigator) = connector();
        let err = connector
            .connect(WalletProvider::Freighter, false)
            .await
            .unwrap_err();

        assert_eq!(err, WalletError::NotInstalled("Freighter"));
        assert_eq!(notifier.last().unwrap().title, "Freighter Not Installed");
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn installed_freighter_connects() {
        let (connector, _, navigator) = connector();
        connector
            .connect(WalletProvider::Freighter, true)
            .await
            .unwrap();
        assert_eq!(navigator.routes(), [ONBOARDING_ROUTE]);
    }

    #[tokio::test]
    async fn coming_soon_provider_is_rejected_up_front() {
        let (connector, notifier, navigator) = connector();
        let err = connector
            .connect(WalletProvider::Rabet, true)
            .await
            .unwrap_err();

        assert_eq!(err, WalletError::ComingSoon("Rabet"));
        assert!(notifier.notifications().is_empty());
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn statuses_match_the_provider_cards() {
        assert_eq!(
            WalletConnector::status(WalletProvider::Freighter, true),
            WalletStatus::Installed
        );
        assert_eq!(
            WalletConnector::status(WalletProvider::Freighter, false),
            WalletStatus::NotInstalled
        );
        assert_eq!(
            WalletConnector::status(WalletProvider::Albedo, false),
            WalletStatus::Available
        );
        assert_eq!(
            WalletConnector::status(WalletProvider::Rabet, true),
            WalletStatus::ComingSoon
        );
    }
}
