//! Participant roles.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use blockgst_core::DomainError;

/// Role chosen once during onboarding.
///
/// The string forms (`seller` / `buyer` / `officer`) are the stable
/// representation used by the role store; `Default` is the fallback the
/// dashboard uses when the store holds nothing recognizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Seller,
    Buyer,
    Officer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Seller, Role::Buyer, Role::Officer];

    /// Stable string form, as persisted in the role store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Seller => "seller",
            Role::Buyer => "buyer",
            Role::Officer => "officer",
        }
    }

    /// Human-facing label.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Seller => "Seller",
            Role::Buyer => "Buyer",
            Role::Officer => "GST Officer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seller" => Ok(Role::Seller),
            "buyer" => Ok(Role::Buyer),
            "officer" => Ok(Role::Officer),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}
