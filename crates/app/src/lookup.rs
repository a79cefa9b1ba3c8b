//! Manual hash lookup.

use std::sync::Arc;

use thiserror::Error;

use blockgst_ledger::{ConfirmationToken, InvoiceRecord, LedgerError, LedgerGateway, VerifyOutcome};

use crate::ports::{Notification, NotificationSink};

/// Lookup failures from the hash-entry page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Empty input; the gateway is never called.
    #[error("hash required")]
    HashRequired,

    /// No record behind the token.
    #[error("no invoice behind the given hash")]
    NotFound,

    /// The verification collaborator rejected the call.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Token lookup as driven from the hash-entry page: trim, verify, notify.
pub struct LookupService {
    gateway: Arc<dyn LedgerGateway>,
    notifier: Arc<dyn NotificationSink>,
}

impl LookupService {
    pub fn new(gateway: Arc<dyn LedgerGateway>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { gateway, notifier }
    }

    pub async fn lookup(&self, raw_hash: &str) -> Result<InvoiceRecord, LookupError> {
        let hash = raw_hash.trim();
        if hash.is_empty() {
            self.notifier.notify(Notification::error(
                "Hash Required",
                "Please enter a valid blockchain hash.",
            ));
            return Err(LookupError::HashRequired);
        }

        let token = ConfirmationToken::new(hash);
        match self.gateway.verify_by_token(&token).await {
            Ok(VerifyOutcome::Verified(record)) => {
                self.notifier.notify(Notification::success(
                    "Invoice Found!",
                    "Successfully retrieved invoice data from blockchain.",
                ));
                Ok(record)
            }
            Ok(VerifyOutcome::NotFound) => {
                self.notifier.notify(Notification::error(
                    "Lookup Failed",
                    "Unable to fetch invoice data from the provided hash.",
                ));
                Err(LookupError::NotFound)
            }
            Err(err) => {
                self.notifier.notify(Notification::error(
                    "Verification Failed",
                    "Unable to verify invoice hash. Please try again.",
                ));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::RecordingNotifier;
    use crate::ports::NotificationKind;
    use async_trait::async_trait;
    use blockgst_invoicing::InvoiceDraft;
    use blockgst_ledger::{DEMO_HASHES, MockLedger, Submission};
    use std::time::Duration;

    struct FailingLedger;

    #[async_trait]
    impl LedgerGateway for FailingLedger {
        async fn submit_invoice(
            &self,
            _draft: &InvoiceDraft,
        ) -> Result<Submission, LedgerError> {
            Err(LedgerError::VerificationFailed("simulated outage".to_string()))
        }

        async fn verify_by_token(
            &self,
            _token: &ConfirmationToken,
        ) -> Result<VerifyOutcome, LedgerError> {
            Err(LedgerError::VerificationFailed("simulated outage".to_string()))
        }
    }

    fn service() -> (LookupService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let service = LookupService::new(
            Arc::new(MockLedger::with_delays(Duration::ZERO, Duration::ZERO)),
            notifier.clone(),
        );
        (service, notifier)
    }

    #[tokio::test]
    async fn blank_input_never_reaches_the_gateway() {
        let (service, notifier) = service();
        let err = service.lookup("   ").await.unwrap_err();
        assert_eq!(err, LookupError::HashRequired);
        assert_eq!(notifier.last().unwrap().title, "Hash Required");
    }

    #[tokio::test]
    async fn demo_hash_resolves_and_notifies_success() {
        let (service, notifier) = service();
        let record = service.lookup(DEMO_HASHES[0]).await.unwrap();
        assert_eq!(record.invoice_number, "INV-2024-001");
        assert_eq!(notifier.last().unwrap().kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn input_is_trimmed_before_verification() {
        let (service, _) = service();
        let record = service
            .lookup(&format!("  {}  ", DEMO_HASHES[1]))
            .await
            .unwrap();
        assert_eq!(record.invoice_number, "INV-2024-001");
    }

    #[tokio::test]
    async fn unknown_hash_maps_to_not_found() {
        let (service, notifier) = service();
        let err = service.lookup("0xdeadbeef").await.unwrap_err();
        assert_eq!(err, LookupError::NotFound);
        assert_eq!(notifier.last().unwrap().title, "Lookup Failed");
    }

    #[tokio::test]
    async fn collaborator_rejection_maps_to_verification_failed() {
        let notifier = Arc::new(RecordingNotifier::new());
        let service = LookupService::new(Arc::new(FailingLedger), notifier.clone());

        let err = service.lookup("0x1234").await.unwrap_err();
        assert!(matches!(err, LookupError::Ledger(_)));
        assert_eq!(notifier.last().unwrap().title, "Verification Failed");
    }
}
