mod app;
mod constants;
mod handlers;
mod rendering;
mod subscriptions;

use shout_config::ShoutConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    init_logging();

    let config = ShoutConfig::load_or_default();
    tracing::info!(
        "shout {} (banner {}x{})",
        env!("CARGO_PKG_VERSION"),
        config.screen_width,
        config.banner_height
    );

    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?
        .block_on(app::run(config))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false));

    #[cfg(feature = "systemd")]
    let registry = registry.with(tracing_journald::layer().ok());

    registry.init();
}
