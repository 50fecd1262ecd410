//! Configuration module for `Kintrace`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

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

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for family graph files
    #[serde(default)]
    pub graphs_dir: String,
    /// Directory for output files
    #[serde(default)]
    pub out_dir: String,
}

/// Path highlight styling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Stroke color for highlighted edges
    #[serde(default)]
    pub stroke: String,
    /// Stroke width for highlighted edges
    #[serde(default)]
    pub stroke_width: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Highlight styling
    #[serde(default)]
    pub highlight: HighlightConfig,
}

/// Overrides collected from CLI flags; `None` means no override.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Log level override
    pub level: Option<String>,
    /// Log file override
    pub file: Option<String>,
    /// Verbose flag override
    pub verbose: Option<bool>,
    /// Output directory override
    pub out_dir: Option<String>,
    /// Highlight stroke color override
    pub stroke: Option<String>,
    /// Highlight stroke width override
    pub stroke_width: Option<String>,
}

impl Config {
    /// Get the `$KINTRACE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/kintrace`
    /// - macOS: `~/Library/Application Support/kintrace`
    /// - Windows: `%APPDATA%\kintrace`
    #[must_use]
    pub fn get_kintrace_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kintrace")
    }

    /// Merge missing fields from defaults into this config
    /// Returns true if any fields were added
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.graphs_dir.is_empty() && !defaults.paths.graphs_dir.is_empty() {
            self.paths.graphs_dir.clone_from(&defaults.paths.graphs_dir);
            changed = true;
        }
        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        if self.highlight.stroke.is_empty() && !defaults.highlight.stroke.is_empty() {
            self.highlight.stroke.clone_from(&defaults.highlight.stroke);
            changed = true;
        }
        if self.highlight.stroke_width.is_empty() && !defaults.highlight.stroke_width.is_empty() {
            self.highlight
                .stroke_width
                .clone_from(&defaults.highlight.stroke_width);
            changed = true;
        }

        changed
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            Self::get_kintrace_dir().join("dconfig.toml")
        }
        #[cfg(not(debug_assertions))]
        {
            Self::get_kintrace_dir().join("config.toml")
        }
    }

    /// Expand `$KINTRACE` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$KINTRACE") {
            let kintrace_dir = Self::get_kintrace_dir();
            value.replace("$KINTRACE", kintrace_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.graphs_dir = Self::expand_variables(&config.paths.graphs_dir);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Apply CLI overrides on top of the loaded configuration
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
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
        if let Some(stroke) = &overrides.stroke {
            self.highlight.stroke.clone_from(stroke);
        }
        if let Some(stroke_width) = &overrides.stroke_width {
            self.highlight.stroke_width.clone_from(stroke_width);
        }
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "graphs_dir" => Some(self.paths.graphs_dir.clone()),
            "out_dir" => Some(self.paths.out_dir.clone()),
            "stroke" => Some(self.highlight.stroke.clone()),
            "stroke_width" => Some(self.highlight.stroke_width.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "graphs_dir" => self.paths.graphs_dir = value.to_string(),
            "out_dir" => self.paths.out_dir = value.to_string(),
            "stroke" => self.highlight.stroke = value.to_string(),
            "stroke_width" => self.highlight.stroke_width = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "graphs_dir" => self.paths.graphs_dir.clone_from(&defaults.paths.graphs_dir),
            "out_dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "stroke" => self.highlight.stroke.clone_from(&defaults.highlight.stroke),
            "stroke_width" => self
                .highlight
                .stroke_width
                .clone_from(&defaults.highlight.stroke_width),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  graphs_dir = \"{}\"", self.paths.graphs_dir)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[highlight]")?;
        writeln!(f, "  stroke = \"{}\"", self.highlight.stroke)?;
        writeln!(f, "  stroke_width = \"{}\"", self.highlight.stroke_width)?;

        Ok(())
    }
}
