//! Onboarding side effects.

use std::sync::Arc;
use std::time::Duration;

use blockgst_onboarding::{OnboardingError, OnboardingFlow, Registration, Role};

use crate::ports::{
    DASHBOARD_ROUTE, Navigator, Notification, NotificationSink, ROLE_KEY, RoleStore,
};

/// Drives the terminal onboarding submit: persist the chosen role, notify
/// the user and, after the fixed visual delay, navigate to the dashboard.
pub struct OnboardingService {
    store: Arc<dyn RoleStore>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
}

impl OnboardingService {
    /// Production-shaped redirect delay (2 s).
    pub fn new(
        store: Arc<dyn RoleStore>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_redirect_delay(store, notifier, navigator, Duration::from_secs(2))
    }

    pub fn with_redirect_delay(
        store: Arc<dyn RoleStore>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            navigator,
            redirect_delay,
        }
    }

    /// Submit the registration.
    ///
    /// Validation failure notifies and changes nothing: no role is
    /// persisted and no navigation happens. Success persists the role
    /// under [`ROLE_KEY`], emits the welcome notification, waits out the
    /// visual delay and navigates to the dashboard. There is no rollback
    /// once the role is persisted; nothing downstream re-validates it.
    pub async fn submit(
        &self,
        flow: &OnboardingFlow,
        form: &Registration,
    ) -> Result<Role, OnboardingError> {
        match flow.submit_registration(form) {
            Ok(role) => {
                self.store.set(ROLE_KEY, role.as_str());
                self.notifier.notify(Notification::success(
                    "Registration Successful!",
                    format!("Welcome to Block-GST as a {}!", role.title()),
                ));

                tokio::time::sleep(self.redirect_delay).await;
                self.navigator.go_to(DASHBOARD_ROUTE);
                Ok(role)
            }
            Err(err) => {
                self.notifier.notify(error_notification(&err));
                Err(err)
            }
        }
    }
}

fn error_notification(err: &OnboardingError) -> Notification {
    match err {
        OnboardingError::MissingRequiredFields { role } => Notification::error(
            "Missing Information",
            format!(
                "Please fill in all required fields for {} registration.",
                role.as_str()
            ),
        ),
        OnboardingError::InvalidGstin => {
            Notification::error("Invalid GSTIN", "Please enter a valid GSTIN number.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryRoleStore, RecordingNavigator, RecordingNotifier};
    use crate::ports::NotificationKind;
    use blockgst_onboarding::{BuyerProfile, SellerProfile};

    struct Harness {
        store: Arc<InMemoryRoleStore>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
        service: OnboardingService,
    }

    fn harness() -> Harness {
        let store = Arc::new(InMemoryRoleStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let service = OnboardingService::with_redirect_delay(
            store.clone(),
            notifier.clone(),
            navigator.clone(),
            Duration::ZERO,
        );
        Harness {
            store,
            notifier,
            navigator,
            service,
        }
    }

    fn filling_flow(role: Role) -> OnboardingFlow {
        let mut flow = OnboardingFlow::new();
        flow.select_role(role);
        flow.advance();
        flow
    }

    fn buyer_form() -> Registration {
        Registration::Buyer(BuyerProfile {
            company_name: "Digital Innovations Inc".to_string(),
            contact_person: "Vikram Shah".to_string(),
            email: "contact@company.com".to_string(),
            phone: None,
            address: None,
        })
    }

    #[tokio::test]
    async fn successful_buyer_registration_persists_and_redirects() {
        let h = harness();
        let flow = filling_flow(Role::Buyer);

        let role = h.service.submit(&flow, &buyer_form()).await.unwrap();
        assert_eq!(role, Role::Buyer);
        assert_eq!(h.store.get(ROLE_KEY).as_deref(), Some("buyer"));

        let last = h.notifier.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.title, "Registration Successful!");
        assert!(last.message.contains("Buyer"));

        assert_eq!(h.navigator.routes(), [DASHBOARD_ROUTE]);
    }

    #[tokio::test]
    async fn missing_email_persists_no_role_and_stays_put() {
        let h = harness();
        let flow = filling_flow(Role::Buyer);

        let Registration::Buyer(mut profile) = buyer_form() else {
            unreachable!()
        };
        profile.email = String::new();

        let err = h
            .service
            .submit(&flow, &Registration::Buyer(profile))
            .await
            .unwrap_err();
        assert_eq!(err, OnboardingError::MissingRequiredFields { role: Role::Buyer });

        assert_eq!(h.store.get(ROLE_KEY), None);
        assert!(h.navigator.routes().is_empty());

        let last = h.notifier.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.title, "Missing Information");
        assert!(last.message.contains("buyer"));
    }

    #[tokio::test]
    async fn invalid_gstin_is_reported_by_name() {
        let h = harness();
        let flow = filling_flow(Role::Seller);

        let form = Registration::Seller(SellerProfile {
            gstin: "29abcde1234f1z5".to_string(),
            business_name: "Tech Solutions Pvt Ltd".to_string(),
            contact_person: "Asha Rao".to_string(),
            email: "contact@business.com".to_string(),
            address: None,
        });

        let err = h.service.submit(&flow, &form).await.unwrap_err();
        assert_eq!(err, OnboardingError::InvalidGstin);
        assert_eq!(h.store.get(ROLE_KEY), None);
        assert_eq!(h.notifier.last().unwrap().title, "Invalid GSTIN");
    }

    #[tokio::test]
    async fn seller_success_welcomes_the_seller_title() {
        let h = harness();
        let flow = filling_flow(Role::Seller);

        let form = Registration::Seller(SellerProfile {
            gstin: "29ABCDE1234F1Z5".to_string(),
            business_name: "Tech Solutions Pvt Ltd".to_string(),
            contact_person: "Asha Rao".to_string(),
            email: "contact@business.com".to_string(),
            address: Some("Mumbai, Maharashtra".to_string()),
        });

        h.service.submit(&flow, &form).await.unwrap();
        assert_eq!(h.store.get(ROLE_KEY).as_deref(), Some("seller"));
        assert!(h.notifier.last().unwrap().message.contains("Seller"));
    }
}
