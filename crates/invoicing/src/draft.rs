//! Invoice draft: ordered line items plus derived totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use blockgst_core::{Gstin, LineItemId};

use crate::item::{LineItem, LineItemInput};

/// Draft validation failures, surfaced through the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Add-item attempted without a description or a non-zero rate.
    #[error("line item needs a description and a rate")]
    IncompleteLineItem,

    /// Submission attempted with no items.
    #[error("invoice has no items")]
    EmptyDraft,

    /// Submission attempted without a buyer name.
    #[error("buyer name is required")]
    MissingBuyerName,
}

/// Buyer block of the invoice header. Only the name is required, and only
/// at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuyerDetails {
    pub name: String,
    pub gstin: Option<String>,
    pub address: Option<String>,
}

/// Seller block of the invoice header, sourced from the registered
/// seller profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerDetails {
    pub gstin: Gstin,
    pub name: String,
    pub address: String,
}

/// An in-progress invoice.
///
/// Items keep insertion order. The three derived totals are recomputed
/// from the full item list after every mutation (never patched
/// incrementally), so they cannot drift from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub buyer: BuyerDetails,
    pub seller: SellerDetails,
    pub notes: Option<String>,
    items: Vec<LineItem>,
    subtotal: Decimal,
    total_gst: Decimal,
    total: Decimal,
}

impl InvoiceDraft {
    pub fn new(
        invoice_number: impl Into<String>,
        date: NaiveDate,
        due_date: NaiveDate,
        seller: SellerDetails,
    ) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            date,
            due_date,
            buyer: BuyerDetails::default(),
            seller,
            notes: None,
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            total_gst: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of line amounts (net of GST).
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Sum of line GST amounts.
    pub fn total_gst(&self) -> Decimal {
        self.total_gst
    }

    /// subtotal + total GST.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Append a line built from the entry scratch.
    ///
    /// A missing description or a zero (or negative) rate rejects the
    /// entry as incomplete and leaves the item list untouched: a rate of
    /// exactly zero counts as never filled in, so a free line item cannot
    /// be entered. Quantity 0 is normalized to 1.
    pub fn add_item(&mut self, input: &LineItemInput) -> Result<LineItemId, DraftError> {
        if input.description.trim().is_empty()
            || input.rate.is_zero()
            || input.rate.is_sign_negative()
        {
            return Err(DraftError::IncompleteLineItem);
        }

        let quantity = if input.quantity == 0 { 1 } else { input.quantity };
        let amount = Decimal::from(quantity) * input.rate;
        let gst_amount = amount * input.gst_rate.fraction();

        let id = LineItemId::new();
        self.items.push(LineItem {
            id,
            description: input.description.clone(),
            quantity,
            rate: input.rate,
            amount,
            gst_rate: input.gst_rate,
            gst_amount,
        });
        self.recompute_totals();
        Ok(id)
    }

    /// Remove the item with a matching identifier.
    ///
    /// An unknown id is a no-op, not an error; totals are recomputed
    /// either way.
    pub fn remove_item(&mut self, id: LineItemId) {
        self.items.retain(|item| item.id != id);
        self.recompute_totals();
    }

    /// Submission guard: at least one item and a named buyer.
    pub fn ready_for_submission(&self) -> Result<(), DraftError> {
        if self.items.is_empty() {
            return Err(DraftError::EmptyDraft);
        }
        if self.buyer.name.trim().is_empty() {
            return Err(DraftError::MissingBuyerName);
        }
        Ok(())
    }

    fn recompute_totals(&mut self) {
        self.subtotal = self.items.iter().map(|item| item.amount).sum();
        self.total_gst = self.items.iter().map(|item| item.gst_amount).sum();
        self.total = self.subtotal + self.total_gst;
    }
}

/// Invoice composition session: a draft plus the current entry scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub draft: InvoiceDraft,
    pub entry: LineItemInput,
}

impl Composer {
    pub fn new(draft: InvoiceDraft) -> Self {
        Self {
            draft,
            entry: LineItemInput::default(),
        }
    }

    /// Commit the current entry as a line item and reset the scratch to
    /// defaults. An incomplete entry is kept as-is for the user to fix.
    pub fn commit_entry(&mut self) -> Result<LineItemId, DraftError> {
        let id = self.draft.add_item(&self.entry)?;
        self.entry = LineItemInput::default();
        Ok(id)
    }
}

/// Render a monetary figure for display: 2 decimal places.
///
/// Rounding happens only here, at the edge; all arithmetic stays exact.
pub fn display_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
