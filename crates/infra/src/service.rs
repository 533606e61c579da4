//! Service: business rules on top of the repository.

use std::sync::Arc;

use storefront_core::DomainResult;
use storefront_products::{DEFAULT_PRICE_THRESHOLD, Notification, NotificationSink, Product, ProductId};

use crate::repository::ProductRepository;
use crate::store::{InMemoryProductStore, ProductStore};

/// Warns about expensive products, then delegates to the repository.
///
/// The warning never blocks the add; repository validation still applies
/// afterwards.
pub struct ProductService<S = InMemoryProductStore> {
    repository: ProductRepository<S>,
    sink: Arc<dyn NotificationSink>,
    price_threshold: i64,
}

impl<S> ProductService<S>
where
    S: ProductStore,
{
    pub fn new(repository: ProductRepository<S>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            repository,
            sink,
            price_threshold: DEFAULT_PRICE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, price_threshold: i64) -> Self {
        self.price_threshold = price_threshold;
        self
    }

    pub fn price_threshold(&self) -> i64 {
        self.price_threshold
    }

    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        if product.price_exceeds(self.price_threshold) {
            self.sink
                .notify(Notification::price_above_threshold(&product, self.price_threshold));
        }
        self.repository.add(product)
    }

    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        self.repository.remove(id)
    }

    pub fn list_all(&self) -> &[Product] {
        self.repository.list_all()
    }

    pub fn repository(&self) -> &ProductRepository<S> {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut ProductRepository<S> {
        &mut self.repository
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for ProductService<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductService")
            .field("repository", &self.repository)
            .field("price_threshold", &self.price_threshold)
            .finish_non_exhaustive()
    }
}
