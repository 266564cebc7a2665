//! `lemonpos-core` — shared building blocks for the point-of-sale crates.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::SessionId;
pub use money::{Money, MoneyParseError};
pub use value_object::ValueObject;
