//! Simulated distributed-ledger boundary: gateway trait, confirmation
//! tokens, QR payloads, invoice records and the in-memory mock gateway.

pub mod gateway;
pub mod mock;
pub mod record;

pub use gateway::{LedgerError, LedgerGateway, Submission, VerifyOutcome};
pub use mock::{DEMO_HASHES, MockLedger};
pub use record::{
    CONTRACT, ConfirmationToken, InvoiceRecord, NETWORK, QrPayload, RecordStatus, RecordedItem,
};
