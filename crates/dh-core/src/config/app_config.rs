use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage backend name, e.g. `sqlite` or `memory` (may be empty)
    pub storage_backend: String,

    /// Database path (path info only, no existence check)
    pub database_path: PathBuf,

    /// Tracing filter directives; empty means "use the built-in defaults"
    pub log_filter: String,

    /// Directory for rolling log files; empty disables file logging
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Missing keys become empty values. Empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            storage_backend: str_at("storage", "backend"),
            database_path: PathBuf::from(str_at("storage", "database_path")),
            log_filter: str_at("logging", "filter"),
            log_dir: PathBuf::from(str_at("logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty values)
    pub fn empty() -> Self {
        Self {
            storage_backend: String::new(),
            database_path: PathBuf::new(),
            log_filter: String::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with paths under the given data directory.
    ///
    /// The data directory is resolved by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            storage_backend: "sqlite".to_string(),
            database_path: data_dir.join("devicehub.db"),
            log_filter: String::new(),
            log_dir: data_dir.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [storage]
            backend = "memory"
            database_path = "/var/lib/devicehub/devices.db"

            [logging]
            filter = "dh_app=trace"
            log_dir = "/var/log/devicehub"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.storage_backend, "memory");
        assert_eq!(
            config.database_path,
            PathBuf::from("/var/lib/devicehub/devices.db")
        );
        assert_eq!(config.log_filter, "dh_app=trace");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/devicehub"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[storage]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_does_not_validate_backend_name() {
        let toml_value: Value = toml::from_str("[storage]\nbackend = \"postgres\"").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Unknown backends are a wiring concern
        assert_eq!(config.storage_backend, "postgres");
    }

    #[test]
    fn test_with_system_defaults_creates_paths_under_data_dir() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.storage_backend, "sqlite");
        assert_eq!(config.database_path, PathBuf::from("/tmp/test/devicehub.db"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/test/logs"));
        assert_eq!(config.log_filter, "");
    }
}
