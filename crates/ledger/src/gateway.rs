//! Ledger gateway boundary.

use async_trait::async_trait;
use thiserror::Error;

use blockgst_invoicing::InvoiceDraft;

use crate::record::{ConfirmationToken, InvoiceRecord, QrPayload};

/// Ledger-side failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The submission/verification collaborator rejected the call.
    #[error("ledger verification failed: {0}")]
    VerificationFailed(String),
}

/// Result of a successful submission: the confirmation token plus the
/// payload to render as a QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub token: ConfirmationToken,
    pub payload: QrPayload,
}

/// Outcome of a token lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified(InvoiceRecord),
    NotFound,
}

/// Boundary to the distributed ledger.
///
/// A started call always resolves (success or failure); there is no
/// cancellation, no timeout and no automatic retry. Failed calls are
/// reported once and re-triggered manually.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Record a finalized draft, returning its confirmation token and the
    /// renderable payload. Callers are expected to have run the draft's
    /// submission guard first.
    async fn submit_invoice(&self, draft: &InvoiceDraft) -> Result<Submission, LedgerError>;

    /// Resolve a confirmation token back to its invoice record.
    async fn verify_by_token(
        &self,
        token: &ConfirmationToken,
    ) -> Result<VerifyOutcome, LedgerError>;
}
