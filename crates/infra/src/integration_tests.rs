//! Integration tests for the checkout pipeline.
//!
//! Tests: Cart → CheckoutService → CsvOrderLog → reload
//!
//! Verifies:
//! - every accepted checkout becomes exactly one row, in order
//! - rejected checkouts never reach the file
//! - a fresh handle on the same file sees everything previously appended

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    use lemonpos_core::Money;
    use lemonpos_products::Catalog;
    use lemonpos_sales::Cart;

    use crate::checkout_service::CheckoutService;
    use crate::order_log::{CsvOrderLog, OrderLog};

    fn opening_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 4)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap()
    }

    #[test]
    fn a_day_of_trading_round_trips_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        let catalog = Catalog::lemonade_stand();
        let service = CheckoutService::new(CsvOrderLog::new(&path));

        let mut cart = Cart::new();
        cart.add(catalog.resolve("Classic Lemonade").unwrap(), 2);
        cart.add(catalog.resolve("Strawberry Mint").unwrap(), 1);
        service
            .checkout(&mut cart, "Ada", "5551234567", opening_time())
            .unwrap();

        // Rejected: the cart survives and nothing is written.
        cart.add(catalog.resolve("Iced Tea Fusion").unwrap(), 3);
        assert!(service.checkout(&mut cart, "", "5551234567", opening_time()).is_err());
        assert_eq!(CsvOrderLog::new(&path).load_all().unwrap().len(), 1);

        service
            .checkout(
                &mut cart,
                "Grace",
                "5559876543",
                opening_time() + Duration::minutes(5),
            )
            .unwrap();

        let reopened = CsvOrderLog::new(&path).load_all().unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened[0].customer_name(), "Ada");
        assert_eq!(reopened[0].total(), Money::from_cents(2 * 400 + 550));
        assert_eq!(reopened[0].items_summary(), "2x Classic Lemonade, 1x Strawberry Mint");
        assert_eq!(reopened[1].customer_name(), "Grace");
        assert_eq!(reopened[1].total(), Money::from_cents(3 * 450));
        assert_eq!(reopened[1].placed_at(), opening_time() + Duration::minutes(5));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 32,
            ..ProptestConfig::default()
        })]

        /// Property: what goes into the file comes back out unchanged.
        #[test]
        fn appended_orders_reload_identically(
            baskets in proptest::collection::vec(
                proptest::collection::vec((0usize..8, 1i64..=8), 1..5),
                1..12,
            )
        ) {
            let dir = tempfile::tempdir().unwrap();
            let log = CsvOrderLog::new(dir.path().join("orders.csv"));
            let catalog = Catalog::lemonade_stand();
            let service = CheckoutService::new(&log);

            let mut placed = Vec::new();
            for (i, basket) in baskets.iter().enumerate() {
                let mut cart = Cart::new();
                for (idx, qty) in basket {
                    cart.add(&catalog.products()[*idx], *qty);
                }
                let at = opening_time() + Duration::seconds(i as i64);
                placed.push(service.checkout(&mut cart, "Ada", "5551234567", at).unwrap());
            }

            let loaded = log.load_all().unwrap();
            prop_assert_eq!(loaded, placed);
        }
    }
}
