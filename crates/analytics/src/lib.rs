//! `lemonpos-analytics`
//!
//! **Responsibility:** read-only sales reporting over the order log.
//!
//! - Never writes to the log.
//! - Recomputes from scratch on every call.

pub mod aggregator;
pub mod chart;
pub mod report;

pub use aggregator::Aggregator;
pub use chart::render_bestseller_chart;
pub use report::{ProductSales, SalesReport};
