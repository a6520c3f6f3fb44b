//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default window title.
pub const DEFAULT_TITLE: &str = "Windows Message Logger CheapSpy";

/// Default redraw timer period in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Shortest redraw timer period accepted from any source.
pub const MIN_TICK_MS: u64 = 10;

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

    /// A setting has a value outside its accepted range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Name of the offending setting.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cheapspy/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Window (terminal) title.
    #[serde(default)]
    pub title: Option<String>,

    /// Redraw timer period in milliseconds.
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,

    /// Capture mouse input.
    #[serde(default)]
    pub mouse_capture: Option<bool>,

    /// Ask the terminal to report key releases and auto-repeat.
    #[serde(default)]
    pub report_key_events: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Window title.
    pub title: String,
    /// Redraw timer period in milliseconds.
    pub tick_interval_ms: u64,
    /// Capture mouse input.
    pub mouse_capture: bool,
    /// Ask the terminal to report key releases and auto-repeat.
    pub report_key_events: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tick_interval_ms: DEFAULT_TICK_MS,
            mouse_capture: true,
            report_key_events: true,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Redraw timer period.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check ranges that the file format alone cannot express.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tick_interval_ms < MIN_TICK_MS {
            return Err(ConfigError::InvalidValue {
                key: "tick_interval_ms",
                reason: format!(
                    "{} is below the minimum of {MIN_TICK_MS}",
                    self.tick_interval_ms
                ),
            });
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cheapspy/cheapspy.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cheapspy").join("cheapspy.log")
    } else {
        PathBuf::from("cheapspy.log")
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
/// Returns `~/.config/cheapspy/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cheapspy").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHEAPSPY_CONFIG` environment variable
/// 3. Default path `~/.config/cheapspy/config.toml`
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

    if let Ok(env_path) = std::env::var("CHEAPSPY_CONFIG") {
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
        title: config.title.unwrap_or(defaults.title),
        tick_interval_ms: config.tick_interval_ms.unwrap_or(defaults.tick_interval_ms),
        mouse_capture: config.mouse_capture.unwrap_or(defaults.mouse_capture),
        report_key_events: config
            .report_key_events
            .unwrap_or(defaults.report_key_events),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHEAPSPY_TITLE`: Override window title
/// - `CHEAPSPY_TICK_MS`: Override redraw period
///
/// # Errors
///
/// Returns error if `CHEAPSPY_TICK_MS` is set but is not an integer.
pub fn apply_env_overrides(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup` (the environment, in production).
pub fn apply_overrides_from<F>(
    mut config: ResolvedConfig,
    lookup: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(title) = lookup("CHEAPSPY_TITLE") {
        config.title = title;
    }

    if let Some(raw) = lookup("CHEAPSPY_TICK_MS") {
        config.tick_interval_ms =
            raw.trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    key: "CHEAPSPY_TICK_MS",
                    reason: format!("{raw:?}: {e}"),
                })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    title_override: Option<String>,
    tick_override: Option<u64>,
    mouse_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(title) = title_override {
        config.title = title;
    }

    if let Some(tick) = tick_override {
        config.tick_interval_ms = tick;
    }

    if let Some(mouse) = mouse_override {
        config.mouse_capture = mouse;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
