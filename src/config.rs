//! CLI configuration: TOML file with sensible defaults and environment
//! variable overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Output display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Enable colored output
    pub colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Ulam-spiral defaults, used when the subcommand omits its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Grid side length; must be odd
    pub size: usize,
    /// Value placed at the center cell
    pub start: u64,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self { size: 27, start: 1 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub spiral: SpiralConfig,
}

impl Config {
    /// Load from a TOML file, validate, and apply environment overrides.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse from TOML source; missing sections fall back to defaults.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let mut config: Config = toml::from_str(raw)?;
        config.validate()?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Defaults with environment overrides applied; used when no config
    /// file is given.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.spiral.size == 0 || self.spiral.size % 2 == 0 {
            return Err(ConfigError::Validation(format!(
                "spiral.size must be odd, got {}",
                self.spiral.size
            )));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if env::var_os("PRIMORDIAL_NO_COLOR").is_some() || env::var_os("NO_COLOR").is_some() {
            self.display.colors = false;
        }
    }
}
