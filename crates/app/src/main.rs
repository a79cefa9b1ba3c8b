//! Scripted demo session over the in-memory ports and the simulated
//! ledger: wallet connect, seller onboarding, invoice composition and
//! submission, token verification, then a QR scan of the issued payload.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use blockgst_app::{
    InMemoryRoleStore, InvoiceService, LookupService, OnboardingService, RecordingNavigator,
    TracingNotifier, UserSession, WalletConnector, WalletProvider, dashboard,
};
use blockgst_core::Gstin;
use blockgst_invoicing::{Composer, GstRate, InvoiceDraft, LineItemInput, SellerDetails,
    display_amount};
use blockgst_ledger::MockLedger;
use blockgst_onboarding::{OnboardingFlow, Registration, Role, SellerProfile};
use blockgst_scanner::{ScanSession, SimulatedCamera, SimulatedDetector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blockgst_observability::init();

    let store = Arc::new(InMemoryRoleStore::new());
    let notifier = Arc::new(TracingNotifier);
    let navigator = Arc::new(RecordingNavigator::new());
    // Demo runs with short delays; the defaults are the production-shaped
    // multi-second ones.
    let ledger = Arc::new(MockLedger::with_delays(
        Duration::from_millis(300),
        Duration::from_millis(200),
    ));

    // Connect a wallet, landing in onboarding.
    let wallet = WalletConnector::with_delays(
        notifier.clone(),
        navigator.clone(),
        Duration::from_millis(200),
        Duration::from_millis(150),
    );
    wallet.connect(WalletProvider::Freighter, true).await?;

    // Onboard as a seller.
    let mut flow = OnboardingFlow::new();
    flow.select_role(Role::Seller);
    flow.advance();

    let onboarding = OnboardingService::with_redirect_delay(
        store.clone(),
        notifier.clone(),
        navigator.clone(),
        Duration::from_millis(200),
    );
    let form = Registration::Seller(SellerProfile {
        gstin: "29ABCDE1234F1Z5".to_string(),
        business_name: "Tech Solutions Pvt Ltd".to_string(),
        contact_person: "Asha Rao".to_string(),
        email: "contact@business.com".to_string(),
        address: Some("Mumbai, Maharashtra".to_string()),
    });
    onboarding.submit(&flow, &form).await?;

    let session = UserSession::new(store.clone());
    tracing::info!(
        role = %session.current_role(),
        view = ?dashboard::view_for(&session),
        "dashboard ready"
    );

    // Compose an invoice and put it on the (simulated) ledger.
    let seller = SellerDetails {
        gstin: Gstin::parse("29ABCDE1234F1Z5")?,
        name: "Tech Solutions Pvt Ltd".to_string(),
        address: "Mumbai, Maharashtra".to_string(),
    };
    let today = chrono::Utc::now().date_naive();
    let mut composer = Composer::new(InvoiceDraft::new(
        "INV-2024-001",
        today,
        today + chrono::Days::new(30),
        seller,
    ));
    composer.draft.buyer.name = "Digital Innovations Inc".to_string();

    composer.entry = LineItemInput {
        description: "Consulting".to_string(),
        quantity: 2,
        rate: Decimal::from(500),
        gst_rate: GstRate::Eighteen,
    };
    composer.commit_entry()?;
    composer.entry = LineItemInput {
        description: "License".to_string(),
        quantity: 1,
        rate: Decimal::from(200),
        gst_rate: GstRate::Zero,
    };
    composer.commit_entry()?;
    tracing::info!(
        subtotal = %display_amount(composer.draft.subtotal()),
        gst = %display_amount(composer.draft.total_gst()),
        total = %display_amount(composer.draft.total()),
        "draft composed"
    );

    let invoices = InvoiceService::new(ledger.clone(), notifier.clone());
    let submission = invoices.issue(&composer.draft).await?;
    tracing::info!(token = %submission.token, "confirmation token issued");

    // Verify the token the way the hash-entry page would.
    let lookup = LookupService::new(ledger.clone(), notifier.clone());
    let record = lookup.lookup(submission.token.as_str()).await?;
    tracing::info!(
        invoice = %record.invoice_number,
        buyer = %record.buyer_name,
        total = %display_amount(record.total_amount),
        "record verified"
    );

    // Scan the issued QR payload back in.
    let camera = SimulatedCamera::new();
    let mut scan = ScanSession::new(&camera);
    scan.start().await?;

    let mut detector = SimulatedDetector::new(submission.payload.to_json()?, 0.3);
    let mut frames = 0usize;
    while frames < 100 {
        frames += 1;
        if let Some(payload) = scan.poll_frame(&mut detector)? {
            tracing::info!(hash = %payload.hash, frames, "QR payload detected");
            break;
        }
    }
    scan.stop();
    tracing::info!(
        acquired = camera.acquired(),
        released = camera.released(),
        "scan session closed"
    );

    Ok(())
}
