use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use windloom_config::DarkModeStrategy;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default for verbose)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Serialization formats for config documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

/// Output formats for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// Generator config module (tailwind.config.js)
    Js,
    /// CSS custom properties
    Css,
}

/// Artifacts produced by `emit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitKind {
    /// Generator config module (tailwind.config.js)
    Js,
    /// CSS custom properties
    Css,
    /// JSON Schema of the config file
    Schema,
}

impl EmitKind {
    /// File written when `--out` is not given
    pub fn default_file_name(self) -> &'static str {
        match self {
            EmitKind::Js => "tailwind.config.js",
            EmitKind::Css => "theme.css",
            EmitKind::Schema => "windloom.schema.json",
        }
    }
}

#[derive(Parser)]
#[command(name = "windloom")]
#[command(about = "windloom - typed theme configuration for utility-class CSS generators")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path(s); later files are layered over earlier ones.
    /// Defaults to windloom.{toml,json,yaml} in the current directory,
    /// falling back to the built-in brand theme.
    #[arg(short = 'C', long, global = true)]
    pub config: Vec<PathBuf>,

    /// Dark mode strategy override (media, class, selector).
    /// Takes precedence over WINDLOOM_DARK_MODE and the config file.
    #[arg(long, global = true)]
    pub dark_mode: Option<DarkModeStrategy>,
}

impl Cli {
    /// Effective log level from flags
    pub fn level_filter(&self) -> LevelFilter {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level.into(),
            (None, true) => LevelFilter::DEBUG,
            (None, false) => LevelFilter::WARN,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with the built-in brand theme
    Init {
        /// Where to write the file (defaults to ./windloom.<format>)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Document format when no path is given
        #[arg(short = 'f', long, value_enum, default_value = "toml")]
        format: DocumentFormat,
    },

    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "toml")]
        format: ShowFormat,
    },

    /// Check the configuration and report every problem
    Validate,

    /// Write a rendered artifact for the generator or stylesheets
    Emit {
        /// What to render
        #[arg(short = 'k', long, value_enum, default_value = "js")]
        kind: EmitKind,

        /// Output file (defaults to a conventional name per kind, '-' for stdout)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// List the files selected by the content globs
    Scan {
        /// Project root to scan
        #[arg(short = 'r', long, default_value = ".")]
        root: PathBuf,
    },

    /// Print one color of a palette
    Shade {
        /// Palette name (e.g. brand)
        palette: String,

        /// Shade key (50, 100, ..., 900)
        key: String,
    },
}
