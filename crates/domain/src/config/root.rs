use serde::{Deserialize, Serialize};

use crate::markup::is_valid_name;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::markup::MarkupConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "cotendo-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/cotendo-dns/config.toml";

/// Main configuration structure for the Cotendo DNS tooling
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Markup repair configuration
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Record set and serialization options
    #[serde(default)]
    pub zone: ZoneConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. cotendo-dns.toml in current directory
    /// 3. /etc/cotendo-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.retain_srv {
            self.zone.retain_srv = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markup.self_closing_tags.is_empty() {
            return Err(ConfigError::Validation(
                "At least one self-closing tag is required".to_string(),
            ));
        }

        for tag in &self.markup.self_closing_tags {
            if !is_valid_name(tag) {
                return Err(ConfigError::InvalidTagName(tag.clone()));
            }
        }

        if self.zone.soa_host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "SOA placeholder host cannot be empty".to_string(),
            ));
        }

        if self.zone.ns_host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "NS placeholder host cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub retain_srv: bool,
}
