//! Reference driver for the storefront data-access layers.
//!
//! Wires store → repository → service plus a separate unit of work, runs the
//! demo scenario, and renders the final listing.

use std::sync::Arc;

use anyhow::Context;

use storefront_infra::config;
use storefront_infra::{
    ConfigError, InMemoryProductStore, NotificationTarget, OutputFormat, ProductRepository,
    ProductService, StorefrontConfig, TracingNotificationSink, UnitOfWork,
};
use storefront_observability::LogFormat;
use storefront_products::{Notification, NotificationSink, Product};

pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

/// Diagnostic log format from the process environment (default `text`).
pub fn log_format_from_env() -> Result<LogFormat, ConfigError> {
    log_format_from_lookup(|key| std::env::var(key).ok())
}

pub fn log_format_from_lookup<F>(lookup: F) -> Result<LogFormat, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(ENV_LOG_FORMAT) {
        Some(raw) => config::parse(ENV_LOG_FORMAT, &raw, |s| s.parse::<LogFormat>()),
        None => Ok(LogFormat::default()),
    }
}

/// Prints notifications on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        match self.format {
            OutputFormat::Text => println!("{notification}"),
            OutputFormat::Json => match serde_json::to_string(&notification) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::error!("failed to serialize notification: {err}"),
            },
        }
    }
}

/// Notification sink selected by `config.notifications`.
pub fn sink_for(config: &StorefrontConfig) -> Arc<dyn NotificationSink> {
    match config.notifications {
        NotificationTarget::Console => Arc::new(ConsoleSink::new(config.output)),
        NotificationTarget::Log => Arc::new(TracingNotificationSink),
    }
}

/// Run the demo scenario and return the final listing.
///
/// The unit of work is deliberately left unconnected from the store: both
/// commits only announce their pending changes.
pub fn run(config: &StorefrontConfig, sink: Arc<dyn NotificationSink>) -> anyhow::Result<Vec<Product>> {
    let repository = ProductRepository::new(InMemoryProductStore::new());
    let mut service = ProductService::new(repository, sink.clone()).with_threshold(config.price_threshold);
    let mut uow = UnitOfWork::new(sink);

    let apple = Product::new(1, "Apple", 10);
    let orange = Product::new(2, "Orange", 20);
    let banana = Product::new(3, "Banana", 30);

    uow.register_new(apple.clone());
    uow.register_new(orange.clone());

    service.add(apple).context("failed to add Apple")?;
    service.add(orange.clone()).context("failed to add Orange")?;

    let report = uow.commit();
    tracing::debug!(commit_id = %report.commit_id, "first commit done");

    uow.register_removed(orange);
    uow.register_removed(banana);

    let report = uow.commit();
    tracing::debug!(commit_id = %report.commit_id, "second commit done");

    Ok(service.repository().list_all().to_vec())
}

/// Render `products` one per line in the requested format.
pub fn render_listing(products: &[Product], format: OutputFormat) -> anyhow::Result<Vec<String>> {
    products
        .iter()
        .map(|p| match format {
            OutputFormat::Text => Ok(p.to_string()),
            OutputFormat::Json => serde_json::to_string(p)
                .with_context(|| format!("failed to serialize product {}", p.id_typed())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_text() {
        assert_eq!(log_format_from_lookup(|_| None), Ok(LogFormat::Text));
    }

    #[test]
    fn log_format_from_variable() {
        let lookup = |key: &str| (key == ENV_LOG_FORMAT).then(|| "json".to_string());
        assert_eq!(log_format_from_lookup(lookup), Ok(LogFormat::Json));
    }

    #[test]
    fn invalid_log_format_names_the_variable() {
        let err = log_format_from_lookup(|_| Some("xml".to_string())).unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, ENV_LOG_FORMAT);
                assert_eq!(value, "xml");
            }
        }
    }

    #[test]
    fn text_listing() {
        let lines = render_listing(
            &[Product::new(1, "Apple", 10), Product::new(2, "Orange", 20)],
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(lines, vec!["ID: 1 Name: Apple Price: 10", "ID: 2 Name: Orange Price: 20"]);
    }

    #[test]
    fn json_listing() {
        let lines = render_listing(&[Product::new(1, "Apple", 10)], OutputFormat::Json).unwrap();
        assert_eq!(lines, vec![r#"{"id":1,"name":"Apple","price":10}"#]);
    }

    #[test]
    fn empty_listing() {
        assert!(render_listing(&[], OutputFormat::Text).unwrap().is_empty());
    }

    #[test]
    fn console_sink_prints_without_panicking() {
        let p = Product::new(1, "Apple", 10);
        ConsoleSink::new(OutputFormat::Text).notify(Notification::saving_new(&p));
        ConsoleSink::new(OutputFormat::Json).notify(Notification::removing(&p));
    }
}
