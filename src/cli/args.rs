//! CLI argument definitions for `Kintrace`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use kintrace::config::ConfigOverrides;
use kintrace::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `stroke`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Find the connection path between two people in a family graph.
    ///
    /// Loads a graph JSON file, runs a shortest-path search between the two
    /// ids, and prints styling for the edges on the path.
    Path {
        /// Path to family graph JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Node id of the first person (search source)
        #[arg(long, value_name = "ID")]
        from: String,

        /// Node id of the second person (search target)
        #[arg(long, value_name = "ID")]
        to: String,

        /// Output format: json (edge styling map) or mermaid (diagram)
        #[arg(short, long, value_name = "FORMAT", default_value = "json")]
        format: String,

        /// Output file path (prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Describe the kinship relationship between two people.
    Relate {
        /// Path to family graph JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Node id of the first person (the label describes this person)
        #[arg(value_name = "ID1")]
        id1: String,

        /// Node id of the second person
        #[arg(value_name = "ID2")]
        id2: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "kintrace",
    about = "Kintrace command-line interface",
    version = kintrace::core::get_version()
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config highlight stroke color
    #[arg(long = "stroke", value_name = "COLOR")]
    pub stroke: Option<String>,

    /// Override config highlight stroke width
    #[arg(long = "stroke-width", value_name = "WIDTH")]
    pub stroke_width: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            out_dir: None,
            stroke: None,
            stroke_width: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn cli_version_comes_from_the_crate() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(kintrace::core::get_version()));
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = base_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.out_dir.is_none());
        assert!(overrides.stroke.is_none());
        assert!(overrides.stroke_width.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = base_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.out_dir = Some(PathBuf::from("/output"));
        cli.stroke = Some("teal".to_string());
        cli.stroke_width = Some("2px".to_string());

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
        assert_eq!(overrides.stroke, Some("teal".to_string()));
        assert_eq!(overrides.stroke_width, Some("2px".to_string()));
    }
}
