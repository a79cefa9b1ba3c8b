//! Role onboarding domain: role selection and role-tagged registration.
//!
//! This crate contains the onboarding business rules as pure,
//! deterministic logic (no IO, no storage). The application shell owns
//! persistence, notifications and navigation.

pub mod flow;
pub mod registration;
pub mod role;

pub use flow::{OnboardingFlow, OnboardingStep};
pub use registration::{
    BuyerProfile, OfficerProfile, OnboardingError, Registration, SellerProfile,
};
pub use role::Role;
