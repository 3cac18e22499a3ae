//! Configuration file loading with precedence handling.

use crate::layout::LayoutParams;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WATERFALL_CONFIG";

/// Environment variable overriding the column count.
pub const COLUMNS_ENV_VAR: &str = "WATERFALL_COLUMNS";

/// Environment variable overriding the viewport width.
pub const VIEWPORT_WIDTH_ENV_VAR: &str = "WATERFALL_VIEWPORT_WIDTH";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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
/// Corresponds to `~/.config/waterfall/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of columns.
    #[serde(default)]
    pub columns: Option<usize>,

    /// Viewport width the layout is computed for.
    #[serde(default)]
    pub viewport_width: Option<f64>,

    /// Gap between adjacent columns.
    #[serde(default)]
    pub horizontal_spacing: Option<f64>,

    /// Gap between vertically adjacent items.
    #[serde(default)]
    pub vertical_spacing: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// Layout values are not validated here; [`LayoutParams::validate`] does that
/// when the engine is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Number of columns.
    pub columns: usize,
    /// Viewport width.
    pub viewport_width: f64,
    /// Gap between adjacent columns.
    pub horizontal_spacing: f64,
    /// Gap between vertically adjacent items.
    pub vertical_spacing: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            viewport_width: 375.0,
            horizontal_spacing: 1.0,
            vertical_spacing: 1.0,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Layout parameters described by this config.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(
            self.columns,
            self.viewport_width,
            self.horizontal_spacing,
            self.vertical_spacing,
        )
    }
}

/// Per-field overrides from the command line.
///
/// `None` leaves the underlying value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    /// `--columns`
    pub columns: Option<usize>,
    /// `--width`
    pub viewport_width: Option<f64>,
    /// `--hspacing`
    pub horizontal_spacing: Option<f64>,
    /// `--vspacing`
    pub vertical_spacing: Option<f64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/waterfall/waterfall.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("waterfall").join("waterfall.log")
    } else {
        PathBuf::from("waterfall.log")
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
/// Returns `~/.config/waterfall/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("waterfall").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `WATERFALL_CONFIG` environment variable
/// 3. Default path `~/.config/waterfall/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
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
        columns: config.columns.unwrap_or(defaults.columns),
        viewport_width: config.viewport_width.unwrap_or(defaults.viewport_width),
        horizontal_spacing: config
            .horizontal_spacing
            .unwrap_or(defaults.horizontal_spacing),
        vertical_spacing: config
            .vertical_spacing
            .unwrap_or(defaults.vertical_spacing),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `WATERFALL_COLUMNS`: Override column count
/// - `WATERFALL_VIEWPORT_WIDTH`: Override viewport width
///
/// Values that fail to parse are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(columns) = env_value::<usize>(COLUMNS_ENV_VAR) {
        config.columns = columns;
    }

    if let Some(width) = env_value::<f64>(VIEWPORT_WIDTH_ENV_VAR) {
        config.viewport_width = width;
    }

    config
}

fn env_value<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: ConfigOverrides) -> ResolvedConfig {
    if let Some(columns) = overrides.columns {
        config.columns = columns;
    }

    if let Some(width) = overrides.viewport_width {
        config.viewport_width = width;
    }

    if let Some(spacing) = overrides.horizontal_spacing {
        config.horizontal_spacing = spacing;
    }

    if let Some(spacing) = overrides.vertical_spacing {
        config.vertical_spacing = spacing;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_waterfall_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("waterfall.log"),
            "Default log path should end with 'waterfall.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }
}
