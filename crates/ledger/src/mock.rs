//! Simulated ledger gateway.
//!
//! Every call resolves after a fixed delay with locally fabricated data;
//! nothing leaves the process. Submissions are retained so their tokens
//! verify afterwards, and a handful of demo hashes are pre-seeded.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use uuid::Uuid;

use blockgst_core::Gstin;
use blockgst_invoicing::InvoiceDraft;

use crate::gateway::{LedgerError, LedgerGateway, Submission, VerifyOutcome};
use crate::record::{
    ConfirmationToken, InvoiceRecord, QrPayload, RecordStatus, RecordedItem,
};

/// Demo hashes that always resolve, for manual-entry testing.
pub const DEMO_HASHES: [&str; 3] = [
    "0x1234abcd5678efgh",
    "0xabcd1234efgh5678",
    "0x5678efgh1234abcd",
];

/// In-memory stand-in for the ledger.
pub struct MockLedger {
    submit_delay: Duration,
    verify_delay: Duration,
    records: Mutex<HashMap<ConfirmationToken, InvoiceRecord>>,
}

impl MockLedger {
    /// Production-shaped delays: 3 s to submit, 2 s to verify.
    pub fn new() -> Self {
        Self::with_delays(Duration::from_secs(3), Duration::from_secs(2))
    }

    /// Tests pass `Duration::ZERO` here.
    pub fn with_delays(submit_delay: Duration, verify_delay: Duration) -> Self {
        let mut records = HashMap::new();
        for hash in DEMO_HASHES {
            let token = ConfirmationToken::new(hash);
            records.insert(token.clone(), demo_record(token));
        }
        Self {
            submit_delay,
            verify_delay,
            records: Mutex::new(records),
        }
    }

    fn fresh_token() -> ConfirmationToken {
        ConfirmationToken::new(format!("0x{}", Uuid::new_v4().simple()))
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerGateway for MockLedger {
    async fn submit_invoice(&self, draft: &InvoiceDraft) -> Result<Submission, LedgerError> {
        tokio::time::sleep(self.submit_delay).await;

        let token = Self::fresh_token();
        let payload = QrPayload::for_draft(&token, draft);
        let record = record_for_draft(&token, draft);
        self.records.lock().await.insert(token.clone(), record);

        tracing::info!(
            token = %token,
            invoice = %draft.invoice_number,
            "invoice recorded on simulated ledger"
        );
        Ok(Submission { token, payload })
    }

    async fn verify_by_token(
        &self,
        token: &ConfirmationToken,
    ) -> Result<VerifyOutcome, LedgerError> {
        tokio::time::sleep(self.verify_delay).await;

        match self.records.lock().await.get(token) {
            Some(record) => Ok(VerifyOutcome::Verified(record.clone())),
            None => Ok(VerifyOutcome::NotFound),
        }
    }
}

fn record_for_draft(token: &ConfirmationToken, draft: &InvoiceDraft) -> InvoiceRecord {
    InvoiceRecord {
        token: token.clone(),
        invoice_number: draft.invoice_number.clone(),
        seller_gstin: draft.seller.gstin.clone(),
        seller_name: draft.seller.name.clone(),
        buyer_name: draft.buyer.name.clone(),
        net_amount: draft.subtotal(),
        gst_amount: draft.total_gst(),
        total_amount: draft.total(),
        date: draft.date,
        due_date: draft.due_date,
        items: draft
            .items()
            .iter()
            .map(|item| RecordedItem {
                description: item.description.clone(),
                quantity: item.quantity,
                rate: item.rate,
                amount: item.amount,
            })
            .collect(),
        status: RecordStatus::Verified,
        ledger_tx_id: format!("TXN_{}", Uuid::new_v4().simple().to_string().to_uppercase()),
    }
}

/// Canned record behind the pre-seeded demo hashes.
fn demo_record(token: ConfirmationToken) -> InvoiceRecord {
    InvoiceRecord {
        token,
        invoice_number: "INV-2024-001".to_string(),
        seller_gstin: Gstin::parse("29ABCDE1234F1Z5").expect("demo GSTIN literal is valid"),
        seller_name: "Tech Solutions Pvt Ltd".to_string(),
        buyer_name: "Digital Innovations Inc".to_string(),
        net_amount: Decimal::from(100_000),
        gst_amount: Decimal::from(18_000),
        total_amount: Decimal::from(118_000),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("demo date literal is valid"),
        due_date: NaiveDate::from_ymd_opt(2024, 2, 15).expect("demo date literal is valid"),
        items: vec![RecordedItem {
            description: "Software Development Services".to_string(),
            quantity: 1,
            rate: Decimal::from(100_000),
            amount: Decimal::from(100_000),
        }],
        status: RecordStatus::Verified,
        ledger_tx_id: "TXN_ABC123XYZ789".to_string(),
    }
}
