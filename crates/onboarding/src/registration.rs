//! Role-tagged registration forms.
//!
//! Each role gets its own profile variant carrying only the fields that
//! role needs, so a buyer form cannot hold a half-filled GSTIN and an
//! officer form cannot hold a business name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use blockgst_core::Gstin;

use crate::role::Role;

/// Onboarding validation failures, surfaced through the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    /// One or more role-required fields were empty at submit time.
    #[error("missing required fields for {role} registration")]
    MissingRequiredFields { role: Role },

    /// The seller GSTIN failed the pattern check.
    #[error("invalid GSTIN")]
    InvalidGstin,
}

/// Seller profile: a GSTIN-registered business issuing invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SellerProfile {
    pub gstin: String,
    pub business_name: String,
    pub contact_person: String,
    pub email: String,
    pub address: Option<String>,
}

/// Buyer profile: a company receiving and verifying invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BuyerProfile {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Officer profile: a GST department auditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OfficerProfile {
    pub officer_id: String,
    pub department: String,
    pub contact_person: String,
    pub email: String,
    pub jurisdiction: Option<String>,
    pub address: Option<String>,
}

/// A submitted registration, tagged by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Registration {
    Seller(SellerProfile),
    Buyer(BuyerProfile),
    Officer(OfficerProfile),
}

impl Registration {
    /// The role this registration is tagged with.
    pub fn role(&self) -> Role {
        match self {
            Registration::Seller(_) => Role::Seller,
            Registration::Buyer(_) => Role::Buyer,
            Registration::Officer(_) => Role::Officer,
        }
    }

    /// Validate the required-field set for the tagged role.
    ///
    /// Whitespace-only input counts as empty. Sellers additionally get
    /// the GSTIN pattern check; the address (and the other optional
    /// fields) are never required.
    pub fn validate(&self) -> Result<(), OnboardingError> {
        let missing = |fields: &[&str]| fields.iter().any(|f| f.trim().is_empty());

        match self {
            Registration::Seller(p) => {
                if missing(&[
                    p.gstin.as_str(),
                    p.business_name.as_str(),
                    p.contact_person.as_str(),
                    p.email.as_str(),
                ]) {
                    return Err(OnboardingError::MissingRequiredFields { role: Role::Seller });
                }
                Gstin::parse(&p.gstin).map_err(|_| OnboardingError::InvalidGstin)?;
                Ok(())
            }
            Registration::Buyer(p) => {
                if missing(&[
                    p.company_name.as_str(),
                    p.contact_person.as_str(),
                    p.email.as_str(),
                ]) {
                    return Err(OnboardingError::MissingRequiredFields { role: Role::Buyer });
                }
                Ok(())
            }
            Registration::Officer(p) => {
                if missing(&[
                    p.officer_id.as_str(),
                    p.department.as_str(),
                    p.contact_person.as_str(),
                    p.email.as_str(),
                ]) {
                    return Err(OnboardingError::MissingRequiredFields { role: Role::Officer });
                }
                Ok(())
            }
        }
    }
}
