//! Logging setup for the `asset-helper` binary.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "asset_helper=warn";

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Stdout stays reserved for command output:
/// - `RUST_LOG=debug asset-helper chmod ./cache` (show every changed entry)
/// - `RUST_LOG=asset_helper=trace asset-helper encode` (aggregate classification)
///
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()
}
