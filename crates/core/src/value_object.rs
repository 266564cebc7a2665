//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. `Money` and the cart/order line snapshots are value
//! objects; a `Product` in the catalog is an entity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(400), Money(400));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
