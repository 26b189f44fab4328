//! # Configuration Loader
//!
//! Reads TOML into the pure-data [`AppConfig`]. Loading does not validate and
//! does not fill defaults; missing keys come back as empty values and the
//! wiring step decides what an empty value means.

use anyhow::Context;
use dh_core::config::AppConfig;
use std::path::PathBuf;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "DEVICEHUB_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve the configuration for this process.
///
/// An explicit path (from `--config` or [`CONFIG_ENV`]) is loaded as is.
/// Without one, paths are placed under the platform data directory.
pub fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let data_dir = dirs::data_dir()
                .context("Failed to resolve the platform data directory")?
                .join("devicehub");
            Ok(AppConfig::with_system_defaults(data_dir))
        }
    }
}
