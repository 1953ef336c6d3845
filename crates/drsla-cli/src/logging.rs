use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` overrides `--log-level`.
///
/// Logs go to stderr so `--format json` output on stdout stays parseable.
pub fn init(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "drsla={level},drsla_engine={level},drsla_types={level}"
        ))
    });

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}
