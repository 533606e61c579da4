//! Infrastructure layer: record store, repository, service, unit of work, config.
//!
//! Layers wrap each other leaf-first:
//! `InMemoryProductStore` → `ProductRepository` → `ProductService`.
//! `UnitOfWork` sits beside them and only touches a repository through
//! `commit_into`.

pub mod config;
pub mod notifications;
pub mod repository;
pub mod service;
pub mod store;
pub mod unit_of_work;

pub use config::{ConfigError, NotificationTarget, OutputFormat, StorefrontConfig};
pub use notifications::{InMemoryNotificationSink, TracingNotificationSink};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::{InMemoryProductStore, ProductStore};
pub use unit_of_work::{CommitReport, UnitOfWork};
