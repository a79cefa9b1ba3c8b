//! Confirmation tokens, QR payloads and verified invoice records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use blockgst_core::Gstin;
use blockgst_invoicing::InvoiceDraft;

/// Network tag stamped into every payload this deployment produces.
/// Scanners refuse payloads carrying anything else.
pub const NETWORK: &str = "stellar-mainnet";

/// Registry contract tag carried alongside the network.
pub const CONTRACT: &str = "SOROBAN_GST_CONTRACT_ID";

/// Opaque confirmation token standing in for a ledger transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationToken(String);

impl ConfirmationToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content of the displayable QR code handed to the buyer.
///
/// The wire form is JSON with camelCase keys (`hash`, `invoiceNumber`,
/// `amount`, `seller`, `network`, `contract`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub hash: ConfirmationToken,
    pub invoice_number: String,
    pub amount: Decimal,
    pub seller: String,
    pub network: String,
    pub contract: String,
}

impl QrPayload {
    /// Build the payload for a draft the ledger just accepted.
    pub fn for_draft(token: &ConfirmationToken, draft: &InvoiceDraft) -> Self {
        Self {
            hash: token.clone(),
            invoice_number: draft.invoice_number.clone(),
            amount: draft.total(),
            seller: draft.seller.gstin.to_string(),
            network: NETWORK.to_string(),
            contract: CONTRACT.to_string(),
        }
    }

    /// Wire form rendered into the QR image.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Verification status of a ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Verified,
    Pending,
    Invalid,
}

/// A line as recorded on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedItem {
    pub description: String,
    pub quantity: u32,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Invoice data resolved from a confirmation token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub token: ConfirmationToken,
    pub invoice_number: String,
    pub seller_gstin: Gstin,
    pub seller_name: String,
    pub buyer_name: String,
    /// Net amount before GST.
    pub net_amount: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<RecordedItem>,
    pub status: RecordStatus,
    /// Transaction reference on the ledger side.
    pub ledger_tx_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let payload = QrPayload {
            hash: ConfirmationToken::new("0xabc"),
            invoice_number: "INV-2024-001".to_string(),
            amount: Decimal::from(1380),
            seller: "29ABCDE1234F1Z5".to_string(),
            network: NETWORK.to_string(),
            contract: CONTRACT.to_string(),
        };

        let json = payload.to_json().unwrap();
        assert!(json.contains("\"invoiceNumber\":\"INV-2024-001\""));
        assert!(json.contains("\"hash\":\"0xabc\""));
        assert!(json.contains("\"network\":\"stellar-mainnet\""));

        let back: QrPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
