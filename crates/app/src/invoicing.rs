//! Invoice submission wiring.

use std::sync::Arc;

use thiserror::Error;

use blockgst_invoicing::{DraftError, InvoiceDraft};
use blockgst_ledger::{LedgerError, LedgerGateway, Submission};

use crate::ports::{Notification, NotificationSink};

/// Submission failures surfaced by the invoice service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Wires a finished draft to the ledger gateway.
///
/// Guard failures never reach the gateway. A ledger failure is reported
/// once; re-submitting is up to the user.
pub struct InvoiceService {
    gateway: Arc<dyn LedgerGateway>,
    notifier: Arc<dyn NotificationSink>,
}

impl InvoiceService {
    pub fn new(gateway: Arc<dyn LedgerGateway>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { gateway, notifier }
    }

    pub async fn issue(&self, draft: &InvoiceDraft) -> Result<Submission, IssueError> {
        if let Err(err) = draft.ready_for_submission() {
            self.notifier.notify(guard_notification(&err));
            return Err(err.into());
        }

        match self.gateway.submit_invoice(draft).await {
            Ok(submission) => {
                self.notifier.notify(Notification::success(
                    "Invoice Created Successfully!",
                    "Invoice has been stored on Stellar blockchain via Soroban.",
                ));
                Ok(submission)
            }
            Err(err) => {
                self.notifier.notify(Notification::error(
                    "Blockchain Error",
                    "Failed to store invoice on blockchain. Please try again.",
                ));
                Err(err.into())
            }
        }
    }
}

fn guard_notification(err: &DraftError) -> Notification {
    match err {
        DraftError::EmptyDraft => Notification::error(
            "No Items",
            "Please add at least one item to the invoice.",
        ),
        DraftError::MissingBuyerName => {
            Notification::error("Missing Buyer Details", "Please enter buyer name.")
        }
        DraftError::IncompleteLineItem => {
            Notification::error("Incomplete Item", "Please fill in description and rate.")
        }
    }
}
