//! Invoice line items and GST slabs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use blockgst_core::{DomainError, LineItemId};

/// GST slab applicable to a line item, in percent.
///
/// The set is closed: only the statutory slabs exist, so a line can never
/// carry a 19 % rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum GstRate {
    Zero,
    Five,
    Twelve,
    #[default]
    Eighteen,
    TwentyEight,
}

impl GstRate {
    pub const ALL: [GstRate; 5] = [
        GstRate::Zero,
        GstRate::Five,
        GstRate::Twelve,
        GstRate::Eighteen,
        GstRate::TwentyEight,
    ];

    pub fn percent(&self) -> u8 {
        match self {
            GstRate::Zero => 0,
            GstRate::Five => 5,
            GstRate::Twelve => 12,
            GstRate::Eighteen => 18,
            GstRate::TwentyEight => 28,
        }
    }

    /// Multiplier form (18 % ⇒ 0.18), exact in decimal.
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }
}

impl TryFrom<u8> for GstRate {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GstRate::Zero),
            5 => Ok(GstRate::Five),
            12 => Ok(GstRate::Twelve),
            18 => Ok(GstRate::Eighteen),
            28 => Ok(GstRate::TwentyEight),
            other => Err(DomainError::validation(format!(
                "unsupported GST rate: {other}%"
            ))),
        }
    }
}

impl From<GstRate> for u8 {
    fn from(value: GstRate) -> Self {
        value.percent()
    }
}

impl core::fmt::Display for GstRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// A single invoice line.
///
/// `amount` and `gst_amount` are derived at construction and never edited
/// in place; editing a line means removing and re-adding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: u32,
    pub rate: Decimal,
    /// quantity × rate.
    pub amount: Decimal,
    pub gst_rate: GstRate,
    /// amount × gst_rate / 100.
    pub gst_amount: Decimal,
}

impl LineItem {
    /// Line total including GST.
    pub fn total(&self) -> Decimal {
        self.amount + self.gst_amount
    }
}

/// Entry scratch for the next line item.
///
/// Defaults mirror a fresh entry row: quantity 1, rate 0, 18 % GST,
/// empty description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    pub description: String,
    pub quantity: u32,
    pub rate: Decimal,
    pub gst_rate: GstRate,
}

impl Default for LineItemInput {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
            rate: Decimal::ZERO,
            gst_rate: GstRate::Eighteen,
        }
    }
}
