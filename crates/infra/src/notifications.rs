//! Notification sinks backed by infrastructure (structured logs, memory).

use std::sync::Mutex;

use storefront_products::{Notification, NotificationSink};

/// Emits every notification as a `tracing` event.
///
/// Threshold warnings go out at `WARN`, commit progress at `INFO`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::PriceAboveThreshold { id, price, threshold, .. } => {
                tracing::warn!(product_id = %id, price, threshold, "{notification}");
            }
            Notification::SavingNew { id, .. } | Notification::Removing { id, .. } => {
                tracing::info!(product_id = %id, "{notification}");
            }
        }
    }
}

/// Records notifications in memory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryNotificationSink {
    recorded: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> Vec<Notification> {
        match self.recorded.lock() {
            Ok(v) => v.clone(),
            Err(_) => vec![],
        }
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Notification> {
        match self.recorded.lock() {
            Ok(mut v) => std::mem::take(&mut *v),
            Err(_) => vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.recorded.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut v) = self.recorded.lock() {
            v.push(notification);
        }
    }
}
