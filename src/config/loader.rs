//! Configuration file loading with precedence handling.

use super::THEME_ABSTRACT;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "HELPCENTER_CONFIG";
/// Environment variable overriding the theme.
pub const ENV_THEME: &str = "HELPCENTER_THEME";
/// Environment variable overriding the search history file.
pub const ENV_HISTORY: &str = "HELPCENTER_HISTORY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/helpcenter/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme name ("abstract" or "ansi").
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// JSON-lines file that accepted searches are appended to.
    #[serde(default)]
    pub history_file: Option<PathBuf>,

    /// TOML file replacing the built-in page content.
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme name.
    pub theme: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Search history file. `None` disables history recording.
    pub history_file: Option<PathBuf>,
    /// Page content file. `None` uses the built-in content.
    pub content_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: THEME_ABSTRACT.to_string(),
            log_file_path: default_log_path(),
            history_file: None,
            content_file: None,
        }
    }
}

/// CLI values that take precedence over every other source.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--theme` value.
    pub theme: Option<String>,
    /// `--history` value.
    pub history_file: Option<PathBuf>,
    /// `--content` value.
    pub content_file: Option<PathBuf>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/helpcenter/helpcenter.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("helpcenter").join("helpcenter.log")
    } else {
        PathBuf::from("helpcenter.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/helpcenter/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("helpcenter").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HELPCENTER_CONFIG` environment variable
/// 3. Default path `~/.config/helpcenter/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        history_file: config.history_file.or(defaults.history_file),
        content_file: config.content_file.or(defaults.content_file),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HELPCENTER_THEME`: Override theme
/// - `HELPCENTER_HISTORY`: Override history file
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var(ENV_THEME) {
        config.theme = theme;
    }

    if let Ok(history) = std::env::var(ENV_HISTORY) {
        config.history_file = Some(PathBuf::from(history));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags that were explicitly given are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    if let Some(history) = cli.history_file {
        config.history_file = Some(history);
    }

    if let Some(content) = cli.content_file {
        config.content_file = Some(content);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
