use lemonpos_core::{DomainError, DomainResult, Entity, Money};

/// A menu item.
///
/// Products are defined once at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    emoji: String,
    unit_price: Money,
}

impl Product {
    /// Build a product, trimming the name.
    ///
    /// The name must be non-empty and the price positive.
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        unit_price: Money,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        if unit_price.is_zero() {
            return Err(DomainError::validation(format!(
                "price of '{name}' must be positive"
            )));
        }

        Ok(Self {
            name,
            emoji: emoji.into(),
            unit_price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_name() {
        let p = Product::new("  Classic Lemonade ", "🍋", Money::from_cents(400)).unwrap();
        assert_eq!(p.name(), "Classic Lemonade");
        assert_eq!(p.id(), "Classic Lemonade");
        assert_eq!(p.unit_price(), Money::from_cents(400));
    }

    #[test]
    fn rejects_blank_name() {
        let err = Product::new("   ", "", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_zero_price() {
        let err = Product::new("Free Water", "💧", Money::ZERO).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("Free Water")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
