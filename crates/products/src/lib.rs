//! Products domain module.
//!
//! The product record, its validation rules, and the notifications the data-access
//! layers emit about products. Pure domain logic (no storage, no output).

pub mod notification;
pub mod product;

pub use notification::{Notification, NotificationSink};
pub use product::{DEFAULT_PRICE_THRESHOLD, Product, ProductId};
