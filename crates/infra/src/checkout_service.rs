//! Checkout orchestration: validate, persist, then clear the cart.
//!
//! ```text
//! cart + customer form
//!   ↓
//! 1. Build the order (validation: name, phone, non-empty cart)
//!   ↓
//! 2. Append it to the order log
//!   ↓
//! 3. Clear the cart
//! ```
//!
//! A failure at step 1 or 2 leaves both the log and the cart untouched so the
//! cashier can fix the input (or the disk) and resubmit.

use chrono::NaiveDateTime;
use thiserror::Error;

use lemonpos_sales::{Cart, Order, ValidationError};

use crate::order_log::{OrderLog, PersistenceError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form or cart was rejected; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The order was valid but could not be saved.
    #[error("order could not be saved: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Turns carts into persisted orders.
#[derive(Debug)]
pub struct CheckoutService<L> {
    log: L,
}

impl<L> CheckoutService<L>
where
    L: OrderLog,
{
    pub fn new(log: L) -> Self {
        Self { log }
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn checkout(
        &self,
        cart: &mut Cart,
        customer_name: &str,
        phone: &str,
        placed_at: NaiveDateTime,
    ) -> Result<Order, CheckoutError> {
        let order = Order::place(customer_name, phone, cart, placed_at).inspect_err(|reason| {
            tracing::warn!(%reason, "checkout rejected");
        })?;

        self.log.append(&order).inspect_err(|error| {
            tracing::error!(%error, "failed to persist order");
        })?;

        cart.clear();
        tracing::info!(
            customer = order.customer_name(),
            items = order.item_count(),
            total = %order.total(),
            "order placed"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lemonpos_core::Money;
    use lemonpos_products::Product;

    use crate::order_log::{CsvOrderLog, InMemoryOrderLog};

    fn test_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(15, 0, 0))
            .unwrap()
    }

    fn product_x() -> Product {
        Product::new("ProductX", "", Money::from_cents(300)).unwrap()
    }

    #[test]
    fn valid_checkout_appends_row_and_clears_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let service = CheckoutService::new(CsvOrderLog::new(&path));

        let mut cart = Cart::new();
        cart.add(&product_x(), 2);

        let order = service
            .checkout(&mut cart, "Ada", "5551234567", test_time())
            .unwrap();

        assert_eq!(order.total(), Money::from_cents(600));
        assert!(cart.is_empty());

        let text = std::fs::read_to_string(&path).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with(",6.00"), "unexpected row: {row}");
        assert!(row.starts_with("2024-06-01 15:00:00,Ada,5551234567,"));
    }

    #[test]
    fn empty_name_is_rejected_without_writing() {
        let log = InMemoryOrderLog::new();
        let service = CheckoutService::new(&log);

        let mut cart = Cart::new();
        cart.add(&product_x(), 2);

        let err = service
            .checkout(&mut cart, "   ", "5551234567", test_time())
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Validation(ValidationError::EmptyName)));
        assert!(log.is_empty());
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn bad_phone_and_empty_cart_are_rejected() {
        let log = InMemoryOrderLog::new();
        let service = CheckoutService::new(&log);

        let mut cart = Cart::new();
        cart.add(&product_x(), 1);
        let err = service
            .checkout(&mut cart, "Ada", "555-1234", test_time())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(ValidationError::InvalidPhone)));

        let mut empty = Cart::new();
        let err = service
            .checkout(&mut empty, "Ada", "5551234567", test_time())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(ValidationError::EmptyCart)));
        assert!(log.is_empty());
    }

    #[test]
    fn persistence_failure_keeps_the_cart() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let service = CheckoutService::new(CsvOrderLog::new(blocker.join("orders.csv")));

        let mut cart = Cart::new();
        cart.add(&product_x(), 2);

        let err = service
            .checkout(&mut cart, "Ada", "5551234567", test_time())
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Persistence(PersistenceError::Io { .. })));
        assert_eq!(cart.item_count(), 2);
        assert!(err.to_string().starts_with("order could not be saved"));
    }
}
