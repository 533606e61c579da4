use anyhow::Context;

use storefront_infra::StorefrontConfig;

fn main() -> anyhow::Result<()> {
    let log_format = storefront_cli::log_format_from_env().context("failed to load configuration")?;
    storefront_observability::init(log_format);

    let config = StorefrontConfig::from_env().context("failed to load configuration")?;

    let products = storefront_cli::run(&config, storefront_cli::sink_for(&config))?;
    for line in storefront_cli::render_listing(&products, config.output)? {
        println!("{line}");
    }

    Ok(())
}
