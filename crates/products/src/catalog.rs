//! The product menu offered by the till.

use std::collections::HashSet;

use lemonpos_core::{DomainError, DomainResult, Money};

use crate::product::Product;

/// Ordered, immutable product menu.
///
/// Names are unique ignoring ASCII case so that case-insensitive lookup is
/// never ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        if products.is_empty() {
            return Err(DomainError::validation("catalog must contain at least one product"));
        }

        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.name().to_ascii_lowercase()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product name in catalog: '{}'",
                    p.name()
                )));
            }
        }

        Ok(Self { products })
    }

    /// The eight-drink lemonade stand menu.
    pub fn lemonade_stand() -> Self {
        const MENU: [(&str, &str, u64); 8] = [
            ("Classic Lemonade", "🍋", 400),
            ("Strawberry Mint", "🍓🌿", 550),
            ("Iced Tea Fusion", "🧊☕", 450),
            ("Blue Raspberry Zest", "🫐", 525),
            ("Sparkling Limeade", "✨", 500),
            ("Ginger Honey Detox", "🍯", 575),
            ("Watermelon Basil Cooler", "🍉🌱", 600),
            ("Tropical Mango Blend", "🥭🍍", 625),
        ];

        let products = MENU
            .iter()
            .filter_map(|(name, emoji, cents)| {
                Product::new(*name, *emoji, Money::from_cents(*cents)).ok()
            })
            .collect();

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Resolve user input to a product.
    ///
    /// Tries, in order: 1-based menu position, exact name, case-insensitive name.
    pub fn resolve(&self, key: &str) -> DomainResult<&Product> {
        let key = key.trim();

        if let Ok(position) = key.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|idx| self.products.get(idx))
                .ok_or_else(|| DomainError::not_found(format!("menu item #{position}")));
        }

        self.get(key)
            .or_else(|| self.products.iter().find(|p| p.name().eq_ignore_ascii_case(key)))
            .ok_or_else(|| DomainError::not_found(format!("product '{key}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, cents: u64) -> Product {
        Product::new(name, "", Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn lemonade_stand_has_the_full_menu() {
        let catalog = Catalog::lemonade_stand();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.products()[0].name(), "Classic Lemonade");
        assert_eq!(
            catalog.get("Tropical Mango Blend").unwrap().unit_price(),
            Money::from_cents(625)
        );
    }

    #[test]
    fn rejects_duplicates_ignoring_case() {
        let err = Catalog::new(vec![product("Lemonade", 100), product("LEMONADE", 200)])
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn rejects_empty_menu() {
        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn resolve_by_position_name_and_case() {
        let catalog = Catalog::lemonade_stand();

        assert_eq!(catalog.resolve("1").unwrap().name(), "Classic Lemonade");
        assert_eq!(catalog.resolve("8").unwrap().name(), "Tropical Mango Blend");
        assert_eq!(catalog.resolve("Iced Tea Fusion").unwrap().name(), "Iced Tea Fusion");
        assert_eq!(catalog.resolve(" iced tea fusion ").unwrap().name(), "Iced Tea Fusion");
    }

    #[test]
    fn resolve_reports_unknown_items() {
        let catalog = Catalog::lemonade_stand();

        assert!(matches!(catalog.resolve("0"), Err(DomainError::NotFound(_))));
        assert!(matches!(catalog.resolve("9"), Err(DomainError::NotFound(_))));
        assert!(matches!(catalog.resolve("Root Beer"), Err(DomainError::NotFound(_))));
    }
}
