//! Record store abstractions (the innermost data-access layer).

pub mod in_memory;

pub use in_memory::InMemoryProductStore;

use storefront_core::{DomainResult, Entity};
use storefront_products::{Product, ProductId};

/// Authoritative product collection.
///
/// Implementations keep insertion order and enforce no uniqueness: adding two
/// records with the same id stores both.
pub trait ProductStore {
    /// Append a record. Always succeeds.
    fn add(&mut self, product: Product);

    /// Remove the first record with this id and return it.
    ///
    /// Fails with `DomainError::NotFound` when no record matches.
    fn remove(&mut self, id: &ProductId) -> DomainResult<Product>;

    /// Remove the first record equal to `product` (id, name and price) and
    /// return it.
    ///
    /// Fails with `DomainError::NotFound` when no record is equal.
    fn remove_record(&mut self, product: &Product) -> DomainResult<Product>;

    /// Every stored record, in insertion order.
    fn list_all(&self) -> &[Product];

    /// First record with this id, if any.
    fn get(&self, id: &ProductId) -> Option<&Product> {
        self.list_all().iter().find(|p| p.id() == id)
    }

    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }
}

impl<S> ProductStore for Box<S>
where
    S: ProductStore + ?Sized,
{
    fn add(&mut self, product: Product) {
        (**self).add(product)
    }

    fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        (**self).remove(id)
    }

    fn remove_record(&mut self, product: &Product) -> DomainResult<Product> {
        (**self).remove_record(product)
    }

    fn list_all(&self) -> &[Product] {
        (**self).list_all()
    }
}
