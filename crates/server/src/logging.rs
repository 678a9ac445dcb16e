//! Tracing subscriber setup for binaries hosting the calculation service.

use fuel_config::{LogFormat, ServiceConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the config's `log_filter` applies. Returns an
/// error if a global subscriber is already installed.
pub fn init_tracing(config: &ServiceConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Plain => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    }
}
