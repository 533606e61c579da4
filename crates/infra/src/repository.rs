//! Repository: validation in front of a record store.

use storefront_core::DomainResult;
use storefront_products::{Product, ProductId};

use crate::store::{InMemoryProductStore, ProductStore};

/// Rejects invalid records, then delegates to the wrapped store.
#[derive(Debug, Clone, Default)]
pub struct ProductRepository<S = InMemoryProductStore> {
    store: S,
}

impl<S> ProductRepository<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store `product` if its price is positive.
    ///
    /// On `DomainError::InvalidData` the store is left untouched.
    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        if let Err(err) = product.validate() {
            tracing::debug!(product_id = %product.id_typed(), error = %err, "repository rejected product");
            return Err(err);
        }
        self.store.add(product);
        Ok(())
    }

    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        self.store.remove(id)
    }

    /// Remove the first stored record equal to `product`.
    pub fn remove_record(&mut self, product: &Product) -> DomainResult<Product> {
        self.store.remove_record(product)
    }

    pub fn list_all(&self) -> &[Product] {
        self.store.list_all()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.store.get(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DomainError;

    fn repo() -> ProductRepository {
        ProductRepository::new(InMemoryProductStore::new())
    }

    #[test]
    fn add_valid_product_reaches_store() {
        let mut repo = repo();
        repo.add(Product::new(1, "Apple", 10)).unwrap();
        assert_eq!(repo.list_all(), &[Product::new(1, "Apple", 10)]);
        assert_eq!(repo.store().len(), 1);
    }

    #[test]
    fn add_rejects_non_positive_price() {
        let mut repo = repo();
        repo.add(Product::new(1, "Apple", 10)).unwrap();

        let err = repo.add(Product::new(2, "Free", 0)).unwrap_err();
        match err {
            DomainError::InvalidData(_) => {}
            _ => panic!("Expected InvalidData error for zero price"),
        }
        assert!(repo.add(Product::new(3, "Negative", -5)).unwrap_err().is_invalid_data());

        assert_eq!(repo.list_all(), &[Product::new(1, "Apple", 10)]);
    }

    #[test]
    fn remove_propagates_not_found() {
        let mut repo = repo();
        let err = repo.remove(&ProductId(42)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn remove_returns_the_stored_record() {
        let mut repo = repo();
        repo.add(Product::new(1, "Apple", 10)).unwrap();
        repo.add(Product::new(2, "Orange", 20)).unwrap();

        let removed = repo.remove(&ProductId(1)).unwrap();
        assert_eq!(removed, Product::new(1, "Apple", 10));
        assert!(repo.get(&ProductId(1)).is_none());
        assert_eq!(repo.into_inner().len(), 1);
    }

    #[test]
    fn remove_record_leaves_same_id_records_alone() {
        let mut repo = repo();
        repo.add(Product::new(1, "Old", 5)).unwrap();
        repo.add(Product::new(1, "New", 10)).unwrap();

        repo.remove_record(&Product::new(1, "New", 10)).unwrap();
        assert_eq!(repo.list_all(), &[Product::new(1, "Old", 5)]);
        assert!(repo.remove_record(&Product::new(1, "New", 10)).unwrap_err().is_not_found());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn seeded() -> impl Strategy<Value = Vec<(u64, i64)>> {
            prop::collection::vec((any::<u64>(), 1i64..=1_000), 0..8)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a positive-priced add grows the listing by exactly that record.
            #[test]
            fn valid_add_appends_exactly_once(
                existing in seeded(),
                id in any::<u64>(),
                name in "[A-Za-z][A-Za-z0-9 ]{0,31}",
                price in 1i64..=i64::MAX
            ) {
                let mut repo = ProductRepository::new(InMemoryProductStore::with_products(
                    existing.iter().map(|(id, price)| Product::new(*id, "seed", *price)),
                ));
                let product = Product::new(id, name, price);
                let before = repo.list_all().iter().filter(|p| **p == product).count();

                prop_assert!(repo.add(product.clone()).is_ok());

                let after = repo.list_all().iter().filter(|p| **p == product).count();
                prop_assert_eq!(after, before + 1);
                prop_assert_eq!(repo.list_all().len(), existing.len() + 1);
                prop_assert_eq!(repo.list_all().last(), Some(&product));
            }

            /// Property: a non-positive-priced add fails and changes nothing.
            #[test]
            fn invalid_add_leaves_store_unchanged(
                existing in seeded(),
                id in any::<u64>(),
                price in i64::MIN..=0
            ) {
                let mut repo = ProductRepository::new(InMemoryProductStore::with_products(
                    existing.iter().map(|(id, price)| Product::new(*id, "seed", *price)),
                ));
                let snapshot = repo.list_all().to_vec();

                let err = repo.add(Product::new(id, "bad", price)).unwrap_err();
                prop_assert!(err.is_invalid_data());
                prop_assert_eq!(repo.list_all(), snapshot.as_slice());
            }
        }
    }
}
