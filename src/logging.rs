use crate::error::{BoardError, Result};
use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this again, or
/// after another subscriber was installed, leaves the existing one in place.
pub fn init(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| BoardError::ConfigError(format!("invalid log filter: {}", e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    Ok(())
}
