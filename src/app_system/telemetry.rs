use crate::app_system::TelemetryConfig;

/// Centralized tracing setup.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies, e.g.
/// `FLOWER_SHOP_TELEMETRY__LOG_LEVEL=debug`.
pub fn setup_tracing(config: &TelemetryConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
