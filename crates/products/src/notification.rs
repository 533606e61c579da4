//! Notifications emitted by the data-access layers.
//!
//! The service and the unit of work never print directly; they hand a
//! [`Notification`] to a [`NotificationSink`], and the sink decides the medium
//! (console, structured log, in-memory recorder).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// A product priced above the service threshold is being added.
    PriceAboveThreshold {
        id: ProductId,
        name: String,
        price: i64,
        threshold: i64,
    },
    /// A pending new product is being saved by a unit-of-work commit.
    SavingNew { id: ProductId, name: String },
    /// A pending removal is being processed by a unit-of-work commit.
    Removing { id: ProductId, name: String },
}

impl Notification {
    pub fn price_above_threshold(product: &Product, threshold: i64) -> Self {
        Self::PriceAboveThreshold {
            id: product.id_typed(),
            name: product.name().to_string(),
            price: product.price(),
            threshold,
        }
    }

    pub fn saving_new(product: &Product) -> Self {
        Self::SavingNew {
            id: product.id_typed(),
            name: product.name().to_string(),
        }
    }

    pub fn removing(product: &Product) -> Self {
        Self::Removing {
            id: product.id_typed(),
            name: product.name().to_string(),
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            Self::PriceAboveThreshold { id, .. } | Self::SavingNew { id, .. } | Self::Removing { id, .. } => *id,
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PriceAboveThreshold { name, threshold, .. } => {
                write!(f, "price exceeds {threshold}: {name}")
            }
            Self::SavingNew { name, .. } => write!(f, "saving new record: {name}"),
            Self::Removing { name, .. } => write!(f, "removing record: {name}"),
        }
    }
}

/// Output medium for notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<S> NotificationSink for Arc<S>
where
    S: NotificationSink + ?Sized,
{
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
