//! Configuration module for `deptadvisor`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory in path-like values.
const DIR_VARIABLE: &str = "$DEPT_ADVISOR";

const fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the advisor backend (e.g. `http://localhost:8000`)
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in seconds; `0` means "use the default"
    #[serde(default)]
    pub timeout_secs: u64,
    /// Show sample data when the backend cannot be reached
    #[serde(default = "default_true")]
    pub fallback_to_samples: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 0,
            fallback_to_samples: true,
        }
    }
}

/// Calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Allow the preference order to be rearranged
    #[serde(default = "default_true")]
    pub reorderable: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { reorderable: true }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated advisory reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Calculator settings
    #[serde(default)]
    pub calculator: CalculatorConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override backend base URL
    pub base_url: Option<String>,
    /// Override request timeout
    pub timeout_secs: Option<u64>,
    /// Override sample-data fallback
    pub fallback_to_samples: Option<bool>,
    /// Override reorderable flag
    pub reorderable: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$DEPT_ADVISOR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/deptadvisor`
    /// - macOS: `~/Library/Application Support/deptadvisor`
    /// - Windows: `%APPDATA%\deptadvisor`
    #[must_use]
    pub fn get_advisor_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deptadvisor")
    }

    /// Get the user config file path (`dconfig.toml` for debug builds).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advisor_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero) in the current config and set in
    /// `defaults` are updated, so upgrades pick up new settings without
    /// touching user choices.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.api.base_url.is_empty() && !defaults.api.base_url.is_empty() {
            self.api.base_url.clone_from(&defaults.api.base_url);
            changed = true;
        }
        if self.api.timeout_secs == 0 && defaults.api.timeout_secs != 0 {
            self.api.timeout_secs = defaults.api.timeout_secs;
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; the config file is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(base_url) = &overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.api.timeout_secs = timeout;
        }
        if let Some(fallback) = overrides.fallback_to_samples {
            self.api.fallback_to_samples = fallback;
        }

        if let Some(reorderable) = overrides.reorderable {
            self.calculator.reorderable = reorderable;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Expand `$DEPT_ADVISOR` in a string to the config directory.
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let advisor_dir = Self::get_advisor_dir();
            value.replace(DIR_VARIABLE, advisor_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields fall back to their serde defaults and
    /// `$DEPT_ADVISOR` is expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it on first run
    ///
    /// Falls back to the defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from a specific file, creating it from defaults if absent.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        match fs::read_to_string(config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content).map_err(|e| e.to_string()))
        {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                config
            }
            Err(e) => {
                crate::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `base_url`, `timeout_secs`,
    /// `fallback`, `reorderable`, `reports_dir` (dashes are accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base_url" | "base-url" => Some(self.api.base_url.clone()),
            "timeout_secs" | "timeout-secs" => Some(self.api.timeout_secs.to_string()),
            "fallback" => Some(self.api.fallback_to_samples.to_string()),
            "reorderable" => Some(self.calculator.reorderable.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = value
                    .parse::<crate::logger::Level>()
                    .map_err(|_| format!("Invalid value for 'level': '{value}'"))?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool("verbose", value)?,
            "base_url" | "base-url" => self.api.base_url = value.trim_end_matches('/').to_string(),
            "timeout_secs" | "timeout-secs" => {
                self.api.timeout_secs = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid value for 'timeout_secs': '{value}'"))?;
            }
            "fallback" => self.api.fallback_to_samples = parse_bool("fallback", value)?,
            "reorderable" => self.calculator.reorderable = parse_bool("reorderable", value)?,
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base_url" | "base-url" => self.api.base_url.clone_from(&defaults.api.base_url),
            "timeout_secs" | "timeout-secs" => self.api.timeout_secs = defaults.api.timeout_secs,
            "fallback" => self.api.fallback_to_samples = defaults.api.fallback_to_samples,
            "reorderable" => self.calculator.reorderable = defaults.calculator.reorderable,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[api]")?;
        writeln!(f, "  base_url = \"{}\"", self.api.base_url)?;
        writeln!(f, "  timeout_secs = {}", self.api.timeout_secs)?;
        writeln!(f, "  fallback_to_samples = {}", self.api.fallback_to_samples)?;

        writeln!(f, "\n[calculator]")?;
        writeln!(f, "  reorderable = {}", self.calculator.reorderable)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
