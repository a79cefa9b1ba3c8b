//! QR payload decoding.

use blockgst_ledger::{NETWORK, QrPayload};

use crate::camera::ScanError;

/// Decode raw QR text into an invoice payload.
///
/// Only payloads carrying a hash and this deployment's network tag are
/// accepted; arbitrary QR codes (URLs, other apps' payloads, payloads
/// from another network) are invalid here.
pub fn decode_payload(raw: &str) -> Result<QrPayload, ScanError> {
    let payload: QrPayload =
        serde_json::from_str(raw).map_err(|e| ScanError::InvalidPayload(e.to_string()))?;

    if payload.hash.as_str().trim().is_empty() {
        return Err(ScanError::InvalidPayload("payload has no hash".to_string()));
    }
    if payload.network != NETWORK {
        return Err(ScanError::InvalidPayload(format!(
            "unknown network: {}",
            payload.network
        )));
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockgst_ledger::{CONTRACT, ConfirmationToken};
    use rust_decimal::Decimal;

    fn payload() -> QrPayload {
        QrPayload {
            hash: ConfirmationToken::new("0x1234abcd5678efgh"),
            invoice_number: "INV-2024-001".to_string(),
            amount: Decimal::from(118_000),
            seller: "29ABCDE1234F1Z5".to_string(),
            network: NETWORK.to_string(),
            contract: CONTRACT.to_string(),
        }
    }

    #[test]
    fn decodes_a_well_formed_payload() {
        let json = payload().to_json().unwrap();
        let decoded = decode_payload(&json).unwrap();
        assert_eq!(decoded, payload());
    }

    #[test]
    fn rejects_non_json_text() {
        let err = decode_payload("https://example.com/not-an-invoice").unwrap_err();
        assert!(matches!(err, ScanError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_a_foreign_network() {
        let mut foreign = payload();
        foreign.network = "testnet".to_string();
        let json = foreign.to_json().unwrap();
        let err = decode_payload(&json).unwrap_err();
        assert!(matches!(err, ScanError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_an_empty_hash() {
        let mut hashless = payload();
        hashless.hash = ConfirmationToken::new("  ");
        let json = hashless.to_json().unwrap();
        assert!(decode_payload(&json).is_err());
    }
}
