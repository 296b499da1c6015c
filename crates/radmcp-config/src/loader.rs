//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::GatewayConfig;

/// Prefix for gateway environment variables. Nested keys use `__`,
/// e.g. `RADMCP_SERVER__KEEPALIVE_SECS`.
pub const ENV_PREFIX: &str = "RADMCP_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`RADMCP_` prefix)
/// 4. `PORT`, which sets `server.port`
///
/// # Errors
///
/// Returns `ConfigError::Load` if a layer cannot be read or a value
/// has the wrong type or an unknown key, or if `server.keepalive_secs`
/// is zero.
pub fn load_config(config_path: Option<&str>) -> Result<GatewayConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(GatewayConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));

    let config: GatewayConfig = figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Rejects values that deserialize fine but cannot be used.
fn validate(config: &GatewayConfig) -> Result<(), ConfigError> {
    if config.server.keepalive_secs == 0 {
        return Err(ConfigError::Load(
            "server.keepalive_secs must be at least 1".into(),
        ));
    }
    Ok(())
}
