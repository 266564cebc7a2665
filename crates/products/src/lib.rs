//! Products / menu module.
//!
//! This crate holds the static product catalog, implemented purely as
//! deterministic domain logic (no IO).

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::Product;
