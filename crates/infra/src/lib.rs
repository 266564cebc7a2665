//! Infrastructure layer: order log storage, configuration, checkout wiring.

pub mod checkout_service;
pub mod config;
pub mod order_log;

#[cfg(test)]
mod integration_tests;

pub use checkout_service::{CheckoutError, CheckoutService};
pub use config::{ConfigError, PosConfig, ProductConfig};
pub use order_log::{CsvOrderLog, InMemoryOrderLog, OrderLog, PersistenceError, SchemaVersion};
