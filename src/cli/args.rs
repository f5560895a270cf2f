//! CLI argument definitions for `MallaTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use malla_tracker::config::ConfigOverrides;
use malla_tracker::logger::Level;

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
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
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
pub enum TermSubcommand {
    /// Append a new term at the end of the board.
    Add,
    /// Remove a term and every course in it.
    Remove {
        /// Id of the term to remove
        #[arg(value_name = "TERM_ID")]
        term_id: String,
    },
    /// Rename a term.
    Rename {
        /// Id of the term to rename
        #[arg(value_name = "TERM_ID")]
        term_id: String,
        /// New term name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a new course (to the first term unless --term is given).
    Add {
        /// Id of the term that should hold the course
        #[arg(long, value_name = "TERM_ID")]
        term: Option<String>,
    },
    /// Remove a course from a term.
    Remove {
        /// Id of the term holding the course
        #[arg(value_name = "TERM_ID")]
        term_id: String,
        /// Id of the course to remove
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// Rename a course.
    Rename {
        /// Id of the course to rename
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// New course name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Set a course's credit value (coerced to a non-negative integer).
    Credits {
        /// Id of the course to update
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Raw credit value (e.g. `6`, `3.7`)
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Toggle a course between done and pending.
    Toggle {
        /// Id of the course to toggle
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// Move a course to the end of another term.
    Move {
        /// Id of the course to move
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Id of the term currently holding the course
        #[arg(value_name = "FROM_TERM_ID")]
        from_term_id: String,
        /// Id of the destination term
        #[arg(value_name = "TO_TERM_ID")]
        to_term_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the board: terms, courses, and the progress summary.
    Show,
    /// Manage terms.
    Term {
        #[command(subcommand)]
        subcommand: TermSubcommand,
    },
    /// Manage courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Print the board as a portable JSON document.
    Export {
        /// Write the document to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Replace the board with a JSON document (`-` reads stdin).
    Import {
        /// Path of the document to import
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Reset the board to the built-in example malla (requires confirmation).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Toggle the display theme between dark and light.
    Theme,
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "mallatracker",
    about = "MallaTracker command-line interface",
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

    /// Override config board data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config board data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be applied to
    /// the loaded configuration. The short-form flag (`--data-dir`) takes precedence
    /// over the long-form flag (`--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
