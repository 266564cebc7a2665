//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog products are entities keyed by their name; two products with the
/// same name are the same product even if other attributes differ.
pub trait Entity {
    /// Identifier type.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
