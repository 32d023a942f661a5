//! Configuration loader (defaults + file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::KioskConfig;

/// Prefix for environment overrides, e.g. `KIOSK_INFERENCE__MODEL`.
pub const ENV_PREFIX: &str = "KIOSK_";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The explicitly requested config file does not exist.
    #[error("configuration file not found: {path}")]
    MissingFile { path: String },
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given; it must exist)
/// 3. Environment variables (`KIOSK_` prefix, `__` separates sections)
pub fn load_config(config_path: Option<&str>) -> Result<KioskConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(KioskConfig::default()));

    if let Some(path) = config_path {
        if !std::path::Path::new(path).is_file() {
            return Err(ConfigError::MissingFile {
                path: path.to_string(),
            });
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
