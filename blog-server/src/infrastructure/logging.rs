use tracing_subscriber::{EnvFilter, fmt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,blog_server=debug";

/// Installs the global subscriber. `RUST_LOG` overrides the filter and
/// `LOG_FORMAT=pretty` switches from JSON lines to human-readable output.
///
/// Also bridges actix-web's `log` records into tracing.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let pretty = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = if pretty {
        builder.pretty().finish().try_init()
    } else {
        builder.json().finish().try_init()
    };
}
