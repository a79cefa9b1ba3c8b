//! `blockgst-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod gstin;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use gstin::Gstin;
pub use id::LineItemId;
pub use value_object::ValueObject;
