use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use lemonpos_core::{Money, ValueObject};

use crate::cart::{Cart, CartLine};
use crate::checkout::{Customer, ValidationError, validate_customer};

/// Snapshot of one cart line inside a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: String,
    pub quantity: u32,
    #[serde(rename = "unit_price_cents")]
    pub unit_price: Money,
}

impl ValueObject for OrderItem {}

impl OrderItem {
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product: line.product().to_string(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
        }
    }
}

/// A finalized purchase.
///
/// Only obtainable through [`Order::place`] or [`Order::restore`], both of
/// which run checkout validation, so every `Order` in memory has a non-empty
/// trimmed name, a 10-digit phone and at least one item. The total always
/// equals the sum of item subtotals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    placed_at: NaiveDateTime,
    customer: Customer,
    items: Vec<OrderItem>,
    total: Money,
}

impl Order {
    /// Turn the current cart into an order.
    ///
    /// The cart itself is not touched; clearing it is the caller's job once the
    /// order has been persisted.
    pub fn place(
        customer_name: &str,
        phone: &str,
        cart: &Cart,
        placed_at: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let customer = validate_customer(customer_name, phone)?;
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        Ok(Self {
            placed_at,
            customer,
            items: cart.lines().iter().map(OrderItem::from).collect(),
            total: cart.total(),
        })
    }

    /// Rebuild an order read back from the order log.
    ///
    /// Items with a zero quantity are rejected as an empty cart would be.
    pub fn restore(
        placed_at: NaiveDateTime,
        customer_name: &str,
        phone: &str,
        items: Vec<OrderItem>,
    ) -> Result<Self, ValidationError> {
        let customer = validate_customer(customer_name, phone)?;
        if items.is_empty() || items.iter().any(|i| i.quantity == 0) {
            return Err(ValidationError::EmptyCart);
        }
        let total = items.iter().map(OrderItem::subtotal).sum();

        Ok(Self {
            placed_at,
            customer,
            items,
            total,
        })
    }

    pub fn placed_at(&self) -> NaiveDateTime {
        self.placed_at
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn customer_name(&self) -> &str {
        self.customer.name()
    }

    pub fn phone(&self) -> &str {
        self.customer.phone().as_str()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Human-readable item list, e.g. `2x Classic Lemonade, 1x Iced Tea Fusion`.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|i| format!("{}x {}", i.quantity, i.product))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
