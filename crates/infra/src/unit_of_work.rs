//! Unit of work: a buffer of pending adds and removals.
//!
//! [`UnitOfWork::commit`] only reports the pending changes through the
//! notification sink and clears the buffer; the record store is not touched.
//! [`UnitOfWork::commit_into`] applies the same changes to a repository,
//! all-or-nothing.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use storefront_core::{CommitId, DomainError, DomainResult};
use storefront_products::{Notification, NotificationSink, Product};

use crate::repository::ProductRepository;
use crate::store::ProductStore;

/// Outcome of a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub commit_id: CommitId,
    pub committed_at: DateTime<Utc>,
    /// Number of "saving new record" entries processed.
    pub saved: usize,
    /// Number of "removing record" entries processed.
    pub removed: usize,
}

impl CommitReport {
    pub fn is_empty(&self) -> bool {
        self.saved == 0 && self.removed == 0
    }
}

pub struct UnitOfWork {
    new_products: Vec<Product>,
    removed_products: Vec<Product>,
    sink: Arc<dyn NotificationSink>,
}

impl UnitOfWork {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            new_products: Vec::new(),
            removed_products: Vec::new(),
            sink,
        }
    }

    /// Queue `product` for saving. No validation, no deduplication.
    pub fn register_new(&mut self, product: Product) {
        self.new_products.push(product);
    }

    /// Queue `product` for removal. No validation, no deduplication.
    pub fn register_removed(&mut self, product: Product) {
        self.removed_products.push(product);
    }

    pub fn pending_new(&self) -> &[Product] {
        &self.new_products
    }

    pub fn pending_removed(&self) -> &[Product] {
        &self.removed_products
    }

    pub fn is_empty(&self) -> bool {
        self.new_products.is_empty() && self.removed_products.is_empty()
    }

    /// Announce every pending change (adds first, then removals, each in
    /// registration order) and clear the buffer.
    ///
    /// Nothing is applied to any store.
    pub fn commit(&mut self) -> CommitReport {
        let report = self.announce();
        self.clear();
        report
    }

    /// Apply every pending change to `repository`, then announce and clear.
    ///
    /// All pending adds must pass repository validation and every pending
    /// removal must equal a record that exists once the adds are in. If either
    /// check fails the repository and the buffer are left as they were and no
    /// notification is emitted.
    pub fn commit_into<S>(&mut self, repository: &mut ProductRepository<S>) -> DomainResult<CommitReport>
    where
        S: ProductStore,
    {
        self.check_applicable(repository)?;

        for product in &self.new_products {
            repository.add(product.clone())?;
        }
        for product in &self.removed_products {
            repository.remove_record(product)?;
        }

        let report = self.announce();
        self.clear();
        Ok(report)
    }

    fn check_applicable<S>(&self, repository: &ProductRepository<S>) -> DomainResult<()>
    where
        S: ProductStore,
    {
        for product in &self.new_products {
            product.validate()?;
        }

        // Each removal consumes one equal record.
        let mut available: Vec<&Product> = repository
            .list_all()
            .iter()
            .chain(&self.new_products)
            .collect();
        for product in &self.removed_products {
            match available.iter().position(|p| *p == product) {
                Some(pos) => {
                    available.swap_remove(pos);
                }
                None => {
                    return Err(DomainError::not_found(format!(
                        "product {} ({})",
                        product.id_typed(),
                        product.name()
                    )));
                }
            }
        }
        Ok(())
    }

    fn announce(&self) -> CommitReport {
        let commit_id = CommitId::new();

        for product in &self.new_products {
            self.sink.notify(Notification::saving_new(product));
        }
        for product in &self.removed_products {
            self.sink.notify(Notification::removing(product));
        }

        let report = CommitReport {
            commit_id,
            committed_at: Utc::now(),
            saved: self.new_products.len(),
            removed: self.removed_products.len(),
        };
        tracing::info!(
            commit_id = %report.commit_id,
            saved = report.saved,
            removed = report.removed,
            "unit of work committed"
        );
        report
    }

    fn clear(&mut self) {
        self.new_products.clear();
        self.removed_products.clear();
    }
}

impl core::fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UnitOfWork")
            .field("new_products", &self.new_products)
            .field("removed_products", &self.removed_products)
            .finish_non_exhaustive()
    }
}
