use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity};

/// Price above which the service layer emits a warning (whole currency units).
pub const DEFAULT_PRICE_THRESHOLD: i64 = 100;

/// Product identifier. Assigned by the caller; uniqueness is not enforced on add.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A product record.
///
/// Immutable once constructed: stores hold owned copies and never rewrite them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: i64,
}

impl Product {
    /// Build a record. No validation happens here; the repository decides what
    /// may be stored.
    pub fn new(id: u64, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in whole currency units.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Storage rule: the price must be strictly positive.
    pub fn validate(&self) -> DomainResult<()> {
        if self.price <= 0 {
            return Err(DomainError::invalid_data(format!(
                "product {} ({}): price must be positive (got {})",
                self.id, self.name, self.price
            )));
        }
        Ok(())
    }

    /// Business rule: whether the price is strictly above `threshold`.
    pub fn price_exceeds(&self, threshold: i64) -> bool {
        self.price > threshold
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ID: {} Name: {} Price: {}", self.id, self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let p = Product::new(1, "Apple", 10);
        assert_eq!(p.to_string(), "ID: 1 Name: Apple Price: 10");
    }

    #[test]
    fn validate_accepts_positive_price() {
        assert!(Product::new(1, "Apple", 1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_and_negative_price() {
        for price in [0, -1, i64::MIN] {
            let err = Product::new(9, "Broken", price).validate().unwrap_err();
            match err {
                DomainError::InvalidData(msg) => assert!(msg.contains("price must be positive")),
                _ => panic!("Expected InvalidData error for price {price}"),
            }
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let at = Product::new(1, "Exact", 100);
        let above = Product::new(2, "Pricey", 101);
        assert!(!at.price_exceeds(DEFAULT_PRICE_THRESHOLD));
        assert!(above.price_exceeds(DEFAULT_PRICE_THRESHOLD));
    }

    #[test]
    fn entity_id_is_the_caller_assigned_id() {
        let p = Product::new(42, "Pear", 5);
        assert_eq!(*Entity::id(&p), ProductId(42));
        assert_eq!(p.id_typed().get(), 42);
    }

    #[test]
    fn serializes_as_flat_json() {
        let p = Product::new(2, "Orange", 20);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "name": "Orange", "price": 20 }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: validation is exactly "price > 0".
            #[test]
            fn validate_matches_sign_of_price(
                id in any::<u64>(),
                name in "[A-Za-z][A-Za-z0-9 ]{0,31}",
                price in any::<i64>()
            ) {
                let p = Product::new(id, name, price);
                prop_assert_eq!(p.validate().is_ok(), price > 0);
            }
        }
    }
}
