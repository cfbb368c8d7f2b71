//! Tracing setup for the server process.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "rover_server=info,rover_fleet=info,rover_core=warn";

/// Build the env filter. An explicit directive wins over `RUST_LOG`,
/// which wins over [`DEFAULT_FILTER`].
pub fn filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::new(d),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Output goes to stderr in compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=rover_core=debug rover-server --config rover.toml
/// ```
pub fn init(directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(filter(directive))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
