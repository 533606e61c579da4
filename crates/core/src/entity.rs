//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The record store resolves id lookups (`get`, `remove`) through this
/// identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
