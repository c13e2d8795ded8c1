use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::Environment;
use crate::error::{Result, TagmakerError};

/// Represents the complete configuration for tagmaker.
///
/// Contains the remote used for fetch/push and the per-environment tag
/// prefixes. Every field is optional in the file; the defaults reproduce
/// the built-in behavior, so running without a configuration file is fully
/// supported.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub prefixes: PrefixesConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Per-environment tag name prefixes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PrefixesConfig {
    #[serde(default = "default_development_prefix")]
    pub development: String,

    #[serde(default = "default_staging_prefix")]
    pub staging: String,

    #[serde(default = "default_regression_prefix")]
    pub regression: String,
}

fn default_development_prefix() -> String {
    Environment::Development.prefix().to_string()
}

fn default_staging_prefix() -> String {
    Environment::Staging.prefix().to_string()
}

fn default_regression_prefix() -> String {
    Environment::Regression.prefix().to_string()
}

impl Default for PrefixesConfig {
    fn default() -> Self {
        PrefixesConfig {
            development: default_development_prefix(),
            staging: default_staging_prefix(),
            regression: default_regression_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            prefixes: PrefixesConfig::default(),
        }
    }
}

impl Config {
    /// The tag prefix configured for an environment
    pub fn prefix_for(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.prefixes.development,
            Environment::Staging => &self.prefixes.staging,
            Environment::Regression => &self.prefixes.regression,
        }
    }

    /// Validate loaded values. A prefix must produce a valid git ref name,
    /// so it is restricted to a conservative character set.
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(TagmakerError::config("remote must not be empty"));
        }

        let prefix_format = regex::Regex::new(r"^[A-Za-z][A-Za-z0-9._-]*$")
            .map_err(|e| TagmakerError::config(format!("internal prefix pattern: {}", e)))?;

        for environment in Environment::ALL {
            let prefix = self.prefix_for(environment);
            if !prefix_format.is_match(prefix) {
                return Err(TagmakerError::config(format!(
                    "prefix '{}' for {} is not a valid tag prefix",
                    prefix, environment
                )));
            }
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagmaker.toml` in current directory
/// 3. `~/.config/.tagmaker.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If a file exists but cannot be read, parsed, or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        Some(fs::read_to_string(path)?)
    } else if Path::new("./tagmaker.toml").exists() {
        Some(fs::read_to_string("./tagmaker.toml")?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagmaker.toml");
        if config_path.exists() {
            Some(fs::read_to_string(config_path)?)
        } else {
            None
        }
    } else {
        None
    };

    let config = match config_str {
        Some(contents) => toml::from_str(&contents)
            .map_err(|e| TagmakerError::config(format!("cannot parse configuration: {}", e)))?,
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}
