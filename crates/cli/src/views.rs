//! Plain-text rendering of the till screens.
//!
//! Every function returns the full text of one screen; the caller decides
//! where to print it.

use std::fmt::Write as _;
use std::path::Path;

use lemonpos_analytics::{SalesReport, render_bestseller_chart};
use lemonpos_infra::order_log::TIMESTAMP_FORMAT;
use lemonpos_products::Catalog;
use lemonpos_sales::Order;

use crate::context::Session;

pub const DEFAULT_TOP: usize = 5;
const CHART_WIDTH: usize = 30;
const RULE: &str = "--------------------------------------------------------------";

pub fn render_welcome() -> String {
    "🥤 Sipzooppp\nGet refreshed with every sip.\nType `help` for commands.\n".to_string()
}

/// The product menu with the quantity already in the cart.
pub fn render_menu(catalog: &Catalog, session: &Session) -> String {
    let name_width = catalog
        .products()
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Product Menu\n");
    for (idx, product) in catalog.products().iter().enumerate() {
        let in_cart = session.cart.quantity_of(product.name());
        let _ = write!(
            out,
            "{:>2}. {} {:<name_width$}  {:>7}",
            idx + 1,
            product.emoji(),
            product.name(),
            product.unit_price().to_string(),
        );
        if in_cart > 0 {
            let _ = write!(out, "  (in cart: {in_cart})");
        }
        out.push('\n');
    }
    out
}

/// Cart lines, amount due and the customer form.
pub fn render_cart(session: &Session) -> String {
    if session.cart.is_empty() {
        return "Your shopping cart is currently empty. \
                Add items from the menu with `add <item> [qty]`!\n"
            .to_string();
    }

    let name_width = session
        .cart
        .lines()
        .iter()
        .map(|l| l.product().chars().count())
        .max()
        .unwrap_or(0)
        .max("Item".len());

    let mut out = String::from("Shopping Cart\n");
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>3}  {:>8}  {:>10}",
        "Item", "Qty", "Price", "Line Total"
    );
    for line in session.cart.lines() {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>3}  {:>8}  {:>10}",
            line.product(),
            line.quantity(),
            line.unit_price().to_string(),
            line.subtotal().to_string(),
        );
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Customer Name: {}", blank_as_dash(&session.customer_name));
    let _ = writeln!(out, "Mobile Number: {}", blank_as_dash(&session.phone));
    let _ = writeln!(out, "Total Amount Due: {}", session.cart.total());
    out
}

/// Raw order history, oldest first.
pub fn render_history(orders: &[Order], data_file: &Path) -> String {
    let mut out = format!("Data is persistently saved to {}.\n", data_file.display());
    if orders.is_empty() {
        out.push_str("No orders have been placed yet.\n");
        return out;
    }

    for order in orders {
        let _ = writeln!(
            out,
            "{}  {}  {}  {:>8}  {}",
            order.placed_at().format(TIMESTAMP_FORMAT),
            order.customer_name(),
            order.phone(),
            order.total().to_string(),
            order.items_summary(),
        );
    }
    out
}

/// Summary metrics followed by the bestseller chart.
pub fn render_analytics(report: &SalesReport, top: usize) -> String {
    if report.is_empty() {
        return "Place orders to unlock sales analytics!\n".to_string();
    }

    let mut out = String::from("Quick Sales Summary\n");
    let _ = writeln!(out, "Total Transactions: {}", report.order_count);
    let _ = writeln!(out, "Gross Revenue: {}", report.total_revenue);
    let _ = writeln!(out, "Total Items Sold: {}", report.items_sold);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Bestsellers (units sold)");
    out.push_str(&render_bestseller_chart(report.top(top), CHART_WIDTH));
    out
}

fn blank_as_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
