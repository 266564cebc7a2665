//! On-disk row layout of the order log and header-based version detection.
//!
//! The header row doubles as the schema marker: a loader recognises the
//! header, then decodes every following row with the matching layout. A file
//! whose header matches no known layout is refused rather than guessed at.

use chrono::NaiveDateTime;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use lemonpos_core::Money;
use lemonpos_sales::{Order, OrderItem};

use super::r#trait::PersistenceError;

/// Timestamp column format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADER_V1: [&str; 5] = ["timestamp", "customer_name", "phone", "items", "total"];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `timestamp,customer_name,phone,items,total`; items as a JSON array.
    V1,
}

impl SchemaVersion {
    /// Layout used for newly created logs.
    pub const CURRENT: SchemaVersion = SchemaVersion::V1;

    pub fn header(self) -> &'static [&'static str] {
        match self {
            SchemaVersion::V1 => &HEADER_V1,
        }
    }

    /// Identify the layout from a header record (surrounding whitespace ignored).
    pub fn detect(header: &StringRecord) -> Option<SchemaVersion> {
        let matches = |expected: &[&str]| {
            header.len() == expected.len()
                && header.iter().zip(expected).all(|(found, want)| found.trim() == *want)
        };

        [SchemaVersion::V1]
            .into_iter()
            .find(|version| matches(version.header()))
    }
}

/// One order as a v1 CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct OrderRowV1 {
    pub timestamp: String,
    pub customer_name: String,
    pub phone: String,
    pub items: String,
    pub total: String,
}

impl OrderRowV1 {
    pub fn from_order(order: &Order) -> Result<Self, PersistenceError> {
        Ok(Self {
            timestamp: order.placed_at().format(TIMESTAMP_FORMAT).to_string(),
            customer_name: order.customer_name().to_string(),
            phone: order.phone().to_string(),
            items: serde_json::to_string(order.items())?,
            total: order.total().to_decimal_string(),
        })
    }

    /// Decode into an `Order`. `row` is the 1-based data row used in errors.
    pub fn into_order(self, row: u64) -> Result<Order, PersistenceError> {
        let corrupt = |reason: String| PersistenceError::Corrupt { row, reason };

        let placed_at = NaiveDateTime::parse_from_str(self.timestamp.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| corrupt(format!("bad timestamp '{}': {e}", self.timestamp)))?;
        let items: Vec<OrderItem> = serde_json::from_str(&self.items)
            .map_err(|e| corrupt(format!("bad items field: {e}")))?;
        let recorded_total: Money = self
            .total
            .parse()
            .map_err(|e| corrupt(format!("bad total '{}': {e}", self.total)))?;

        let order = Order::restore(placed_at, &self.customer_name, &self.phone, items)
            .map_err(|e| corrupt(e.to_string()))?;

        if order.total() != recorded_total {
            return Err(corrupt(format!(
                "recorded total {recorded_total} does not match items ({})",
                order.total()
            )));
        }

        Ok(order)
    }
}
