//! Session cart: product name -> quantity, with price snapshots.

use lemonpos_core::{Money, ValueObject};
use lemonpos_products::Product;

/// Per-line quantity ceiling used when none is configured.
pub const DEFAULT_MAX_LINE_QUANTITY: u32 = 8;

/// One product in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product: String,
    unit_price: Money,
    quantity: u32,
}

impl ValueObject for CartLine {}

impl CartLine {
    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Items selected but not yet purchased.
///
/// Lines keep insertion order and every line has a quantity in
/// `1..=max_line_quantity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    max_line_quantity: u32,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::with_max_line_quantity(DEFAULT_MAX_LINE_QUANTITY)
    }

    /// A cap of zero is treated as one.
    pub fn with_max_line_quantity(max_line_quantity: u32) -> Self {
        Self {
            lines: Vec::new(),
            max_line_quantity: max_line_quantity.max(1),
        }
    }

    pub fn max_line_quantity(&self) -> u32 {
        self.max_line_quantity
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    ///
    /// Non-positive quantities are ignored and return `None`. Otherwise returns
    /// the line's new quantity, which never exceeds the per-line cap.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Option<u32> {
        if quantity <= 0 {
            return None;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let max = self.max_line_quantity;

        match self.position(product.name()) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity).min(max);
                Some(line.quantity)
            }
            None => {
                let quantity = quantity.min(max);
                self.lines.push(CartLine {
                    product: product.name().to_string(),
                    unit_price: product.unit_price(),
                    quantity,
                });
                Some(quantity)
            }
        }
    }

    /// Set the line for `product` to exactly `quantity` (capped). Zero removes it.
    ///
    /// Returns the resulting quantity.
    pub fn set_quantity(&mut self, product: &Product, quantity: u32) -> u32 {
        if quantity == 0 {
            self.remove(product.name());
            return 0;
        }
        let quantity = quantity.min(self.max_line_quantity);

        match self.position(product.name()) {
            Some(idx) => self.lines[idx].quantity = quantity,
            None => self.lines.push(CartLine {
                product: product.name().to_string(),
                unit_price: product.unit_price(),
                quantity,
            }),
        }
        quantity
    }

    pub fn remove(&mut self, product: &str) -> Option<CartLine> {
        self.position(product).map(|idx| self.lines.remove(idx))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, product: &str) -> u32 {
        self.position(product)
            .map(|idx| self.lines[idx].quantity)
            .unwrap_or(0)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product == product)
    }
}
