//! Configuration management for EquipMaster server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UsersConfig {
    /// Password assigned to self-registrations that omit one
    pub default_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub users: UsersConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix EQUIPMASTER_). The
            // section separator is "__" so snake_case keys stay addressable,
            // e.g. EQUIPMASTER_USERS__DEFAULT_PASSWORD.
            .add_source(
                Environment::with_prefix("EQUIPMASTER")
                    .separator("__")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            users: UsersConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_password: "123".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_snake_case_keys() {
        env::set_var("EQUIPMASTER_USERS__DEFAULT_PASSWORD", "from-env");
        env::set_var("EQUIPMASTER_SERVER__PORT", "9090");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.users.default_password, "from-env");
        assert_eq!(config.server.port, 9090);

        env::remove_var("EQUIPMASTER_USERS__DEFAULT_PASSWORD");
        env::remove_var("EQUIPMASTER_SERVER__PORT");
    }
}
