//! Configuration module for the toyc driver.
//!
//! Handles locating and loading `toyc.toml`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use toyc_lex::{DotPolicy, LexConfig};

use crate::error::{Result, ToycError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "toyc.toml";

/// Driver configuration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// How `<digits>.` without a fraction is treated.
    #[serde(default)]
    pub dot_policy: DotPolicySetting,
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Token list format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Configuration spelling of [`DotPolicy`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DotPolicySetting {
    /// Split `123.` into an integer and a `.` separator.
    #[default]
    Fallback,
    /// Reject `123.` with an unexpected-character error.
    Strict,
}

impl From<DotPolicySetting> for DotPolicy {
    fn from(setting: DotPolicySetting) -> Self {
        match setting {
            DotPolicySetting::Fallback => DotPolicy::Fallback,
            DotPolicySetting::Strict => DotPolicy::Strict,
        }
    }
}

/// How the token list is printed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `[Type: ..., Lexeme: '...']` line per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/toyc/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToycError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ToycError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Builds the lexer configuration, with `--strict-dots` taking priority.
    pub fn lex_config(&self, strict_dots: bool) -> LexConfig {
        let policy = if strict_dots {
            DotPolicy::Strict
        } else {
            self.lexer.dot_policy.into()
        };
        LexConfig::new(policy)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("toyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("toyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
