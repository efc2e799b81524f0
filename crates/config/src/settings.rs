//! Service settings
//!
//! Layered: built-in defaults, then an optional config file, then
//! `COLLEGE_AGENT_*` environment variables (double underscore as the
//! section separator, e.g. `COLLEGE_AGENT_SERVER__PORT=8080`).

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enforce the configured CORS origin list
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    /// Allowed CORS origins; empty list falls back to localhost
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
        }
    }
}

/// Dataset file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the colleges JSON file
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String {
    "data/colleges_data.json".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// Load settings from an optional file plus environment overrides
pub fn load_settings(config_path: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("server.host", default_host())?
        .set_default("server.port", default_port())?
        .set_default("server.cors_enabled", default_true())?
        .set_default("dataset.path", default_dataset_path())?;

    if let Some(path) = config_path {
        builder = builder.add_source(config::File::with_name(path));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("COLLEGE_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.dataset.path, "data/colleges_data.json");
        assert!(settings.server.cors_enabled);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        use std::io::Write;
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 8080").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
    }
}
