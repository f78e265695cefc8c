//! CLI argument definitions for `deptadvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use dept_advisor::core::config::ConfigOverrides;
use dept_advisor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
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
        /// Optional configuration key to display (e.g., `level`, `base_url`, `reports_dir`)
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
    /// Print admission percentages for a GPA.
    ///
    /// Departments are ranked in catalog order unless `--move` is given.
    Calc {
        /// Cumulative GPA between 0.0 and 4.0
        #[arg(value_name = "GPA", allow_hyphen_values = true)]
        gpa: String,

        /// Move a department into another's position, e.g. `chemical:civil`.
        /// Repeat to apply several moves in order.
        #[arg(short, long = "move", value_name = "DEPT:TARGET")]
        moves: Vec<String>,

        /// Keep the catalog order and ignore moves
        #[arg(long)]
        fixed: bool,
    },
    /// Start an interactive calculator session on stdin.
    Session {
        /// Keep the catalog order and ignore moves
        #[arg(long)]
        fixed: bool,
    },
    /// Take the interest quiz.
    ///
    /// Prompts for each question, or takes all answers at once with `--answers`.
    Quiz {
        /// Comma-separated option numbers, one per question (e.g. `1,3,2,5,4,1`)
        #[arg(long, value_name = "N,N,...")]
        answers: Option<String>,

        /// Print the answers without sending them to the backend
        #[arg(long)]
        no_submit: bool,
    },
    /// Send a GPA to the backend.
    SubmitGpa {
        /// Cumulative GPA between 0.0 and 4.0
        #[arg(value_name = "GPA", allow_hyphen_values = true)]
        gpa: String,
    },
    /// Show department recommendations.
    Recommend,
    /// Show historical admission cutoffs.
    Cutoffs {
        /// Only show this department
        #[arg(short, long, value_name = "NAME")]
        department: Option<String>,
    },
    /// Show alumni testimonials.
    Testimonials {
        /// Only show this department ("All" shows everything)
        #[arg(short, long, value_name = "NAME")]
        department: Option<String>,
    },
    /// Generate an advisor report.
    ///
    /// Combines the score table, recommendations, cutoffs and testimonials.
    Report {
        /// GPA to score (omit for a report without the score table)
        #[arg(long, value_name = "GPA", allow_hyphen_values = true)]
        gpa: Option<String>,

        /// Move a department into another's position, e.g. `chemical:civil`
        #[arg(short, long = "move", value_name = "DEPT:TARGET")]
        moves: Vec<String>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "deptadvisor",
    about = "Department advisor: GPA calculator, interest quiz and admission insights",
    version = env!("CARGO_PKG_VERSION")
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

    /// Never contact the backend; read commands use sample data
    #[arg(long)]
    pub offline: bool,

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

    /// Override backend base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override backend request timeout in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Override sample-data fallback for read commands (true/false)
    #[arg(long = "fallback", value_parser = BoolishValueParser::new())]
    pub fallback: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--fixed` on `calc` and `session` maps to `reorderable = false`.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let fixed = matches!(
            self.command,
            Command::Calc { fixed: true, .. } | Command::Session { fixed: true }
        );

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            base_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
            fallback_to_samples: self.fallback,
            reorderable: fixed.then_some(false),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
