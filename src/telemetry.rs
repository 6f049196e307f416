//! Structured logging setup.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::settings::AppConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(false))
            .init();
    }

    tracing::info!(
        service = %config.name,
        env = %config.env,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );
}
