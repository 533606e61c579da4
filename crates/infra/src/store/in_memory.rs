use storefront_core::{DomainError, DomainResult, Entity};
use storefront_products::{Product, ProductId};

use super::ProductStore;

/// In-memory record store backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryProductStore {
    products: Vec<Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records (kept in the given order).
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().collect(),
        }
    }
}

impl ProductStore for InMemoryProductStore {
    fn add(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id_typed(), name = product.name(), "store add");
        self.products.push(product);
    }

    fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let pos = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;

        let removed = self.products.remove(pos);
        tracing::debug!(product_id = %id, name = removed.name(), "store remove");
        Ok(removed)
    }

    fn remove_record(&mut self, product: &Product) -> DomainResult<Product> {
        let pos = self
            .products
            .iter()
            .position(|p| p == product)
            .ok_or_else(|| {
                DomainError::not_found(format!("product {} ({})", product.id(), product.name()))
            })?;

        let removed = self.products.remove(pos);
        tracing::debug!(product_id = %removed.id(), name = removed.name(), "store remove record");
        Ok(removed)
    }

    fn list_all(&self) -> &[Product] {
        &self.products
    }
}
