use std::collections::HashMap;

use lemonpos_core::Money;
use lemonpos_sales::Order;

/// Cumulative sales of one product across the whole log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSales {
    pub product: String,
    pub units: u64,
    pub revenue: Money,
}

/// Summary of every order in the log.
///
/// `bestsellers` is ranked by units sold, descending; equal unit counts are
/// ordered by product name so the ranking is stable between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesReport {
    pub order_count: usize,
    pub total_revenue: Money,
    pub items_sold: u64,
    pub bestsellers: Vec<ProductSales>,
}

impl SalesReport {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut by_product: HashMap<&str, (u64, Money)> = HashMap::new();
        let mut total_revenue = Money::ZERO;
        let mut items_sold = 0u64;

        for order in orders {
            total_revenue += order.total();
            for item in order.items() {
                let entry = by_product
                    .entry(item.product.as_str())
                    .or_insert((0, Money::ZERO));
                entry.0 += u64::from(item.quantity);
                entry.1 += item.subtotal();
                items_sold += u64::from(item.quantity);
            }
        }

        let mut bestsellers: Vec<ProductSales> = by_product
            .into_iter()
            .map(|(product, (units, revenue))| ProductSales {
                product: product.to_string(),
                units,
                revenue,
            })
            .collect();
        bestsellers.sort_by(|a, b| b.units.cmp(&a.units).then_with(|| a.product.cmp(&b.product)));

        Self {
            order_count: orders.len(),
            total_revenue,
            items_sold,
            bestsellers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// The `n` best-selling products.
    pub fn top(&self, n: usize) -> &[ProductSales] {
        &self.bestsellers[..n.min(self.bestsellers.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use lemonpos_sales::OrderItem;
    use proptest::prelude::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn item(product: &str, quantity: u32, cents: u64) -> OrderItem {
        OrderItem {
            product: product.to_string(),
            quantity,
            unit_price: Money::from_cents(cents),
        }
    }

    fn order(items: Vec<OrderItem>) -> Order {
        Order::restore(at(), "Ada", "5551234567", items).unwrap()
    }

    #[test]
    fn empty_log_yields_empty_report() {
        let report = SalesReport::from_orders(&[]);
        assert!(report.is_empty());
        assert_eq!(report.total_revenue, Money::ZERO);
        assert!(report.bestsellers.is_empty());
        assert!(report.top(5).is_empty());
    }

    #[test]
    fn more_units_rank_higher() {
        let orders = vec![order(vec![item("A", 3, 100)]), order(vec![item("B", 5, 100)])];
        let report = SalesReport::from_orders(&orders);

        let ranked: Vec<_> = report.bestsellers.iter().map(|p| p.product.as_str()).collect();
        assert_eq!(ranked, ["B", "A"]);
        assert_eq!(report.bestsellers[0].units, 5);
        assert_eq!(report.bestsellers[1].units, 3);
    }

    #[test]
    fn units_accumulate_across_orders() {
        let orders = vec![
            order(vec![item("Lemonade", 2, 400), item("Tea", 1, 450)]),
            order(vec![item("Tea", 4, 450)]),
            order(vec![item("Lemonade", 1, 400)]),
        ];
        let report = SalesReport::from_orders(&orders);

        assert_eq!(report.order_count, 3);
        assert_eq!(report.items_sold, 8);
        assert_eq!(report.total_revenue, Money::from_cents(3 * 400 + 5 * 450));
        assert_eq!(
            report.bestsellers,
            vec![
                ProductSales {
                    product: "Tea".into(),
                    units: 5,
                    revenue: Money::from_cents(2250),
                },
                ProductSales {
                    product: "Lemonade".into(),
                    units: 3,
                    revenue: Money::from_cents(1200),
                },
            ]
        );
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let orders = vec![order(vec![
            item("Zest", 2, 100),
            item("Mint", 2, 100),
            item("Basil", 2, 100),
        ])];
        let report = SalesReport::from_orders(&orders);
        let ranked: Vec<_> = report.bestsellers.iter().map(|p| p.product.as_str()).collect();
        assert_eq!(ranked, ["Basil", "Mint", "Zest"]);
        assert_eq!(report.top(2).len(), 2);
    }

    proptest! {
        /// Property: revenue is the sum of order totals and ranking is non-increasing.
        #[test]
        fn revenue_and_ranking_are_consistent(
            baskets in proptest::collection::vec(
                proptest::collection::vec((0usize..5, 1u32..=8, 1u64..2_000), 1..5),
                0..20,
            )
        ) {
            let names = ["A", "B", "C", "D", "E"];
            let orders: Vec<Order> = baskets
                .iter()
                .map(|basket| {
                    order(basket.iter().map(|(p, q, c)| item(names[*p], *q, *c)).collect())
                })
                .collect();

            let report = SalesReport::from_orders(&orders);
            let expected: Money = orders.iter().map(Order::total).sum();
            prop_assert_eq!(report.total_revenue, expected);
            prop_assert_eq!(report.items_sold, orders.iter().map(Order::item_count).sum::<u64>());
            prop_assert!(report.bestsellers.windows(2).all(|w| w[0].units >= w[1].units));
            prop_assert_eq!(
                report.bestsellers.iter().map(|p| p.units).sum::<u64>(),
                report.items_sold
            );
        }
    }
}
