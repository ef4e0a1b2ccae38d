//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `catalog.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// File looked up in the working directory.
const CONFIG_FILE: &str = "catalog.toml";

impl Config {
    /// Load configuration from `catalog.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let file = read_optional(CONFIG_FILE)?;
        Self::resolve(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build the effective configuration from the file contents (if any) and
    /// a variable lookup (the process environment in production).
    fn resolve(
        file: Option<&str>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(content) => toml::from_str(content)?,
            None => Self::default(),
        };
        config.apply_overrides(var);
        config.validate()?;
        Ok(config)
    }

    /// Later keys win: `DB_URL` over `CATALOG_DATABASE_URL`, `RUST_LOG` over
    /// `CATALOG_LOG`, `CATALOG_BIND` over `CATALOG_HOST`/`CATALOG_PORT`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CATALOG_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("CATALOG_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("CATALOG_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        for key in ["CATALOG_DATABASE_URL", "DB_URL"] {
            if let Some(val) = var(key) {
                self.database.url = val;
            }
        }
        for key in ["CATALOG_LOG", "RUST_LOG"] {
            if let Some(val) = var(key) {
                self.logging.filter = val;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:catalog.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catalogd=info,catalog=info,tower_http=debug".to_string(),
        }
    }
}

fn read_optional(path: &str) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const FILE: &str = "
        [server]
        host = '127.0.0.1'
        port = 9090

        [database]
        url = 'sqlite:from-file.db'

        [logging]
        filter = 'debug'
    ";

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_create_local_catalog_database_by_default() {
        let config = Config::resolve(None, env(&[])).unwrap();
        assert_eq!(config.database_url(), "sqlite:catalog.db?mode=rwc");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_take_every_section_from_file() {
        let config = Config::resolve(Some(FILE), env(&[])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.database_url(), "sqlite:from-file.db");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_prefer_db_url_over_file() {
        let config = Config::resolve(Some(FILE), env(&[("DB_URL", "sqlite:legacy.db")])).unwrap();
        assert_eq!(config.database_url(), "sqlite:legacy.db");
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_prefer_db_url_over_catalog_database_url() {
        let config = Config::resolve(
            Some(FILE),
            env(&[
                ("CATALOG_DATABASE_URL", "sqlite:a.db"),
                ("DB_URL", "sqlite:b.db"),
            ]),
        )
        .unwrap();
        assert_eq!(config.database_url(), "sqlite:b.db");
    }

    #[test]
    fn should_reject_blank_db_url() {
        let result = Config::resolve(Some(FILE), env(&[("DB_URL", "  ")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_let_bind_override_host_and_port() {
        let config = Config::resolve(
            Some(FILE),
            env(&[("CATALOG_PORT", "7000"), ("CATALOG_BIND", "localhost:8081")]),
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "localhost:8081");
    }

    #[test]
    fn should_keep_file_port_when_override_is_unparsable() {
        let config = Config::resolve(Some(FILE), env(&[("CATALOG_PORT", "http")])).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn should_reject_zero_port_from_environment() {
        let result = Config::resolve(None, env(&[("CATALOG_PORT", "0")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_take_log_filter_from_rust_log() {
        let config = Config::resolve(
            Some(FILE),
            env(&[("CATALOG_LOG", "warn"), ("RUST_LOG", "trace")]),
        )
        .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_report_malformed_file() {
        let result = Config::resolve(Some("[database\nurl = 1"), env(&[]));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_treat_missing_file_as_absent() {
        assert!(read_optional("does-not-exist.toml").unwrap().is_none());
    }
}
