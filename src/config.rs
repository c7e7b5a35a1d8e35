//! Harness configuration

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

/// Result output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Host result document.
    #[default]
    Json,

    /// Human-readable table.
    Table,
}

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Wrapify cart transform runner
#[derive(Debug, Parser)]
#[command(name = "wrapify", about = "Wrapify cart transform runner", long_about = None)]
pub struct Config {
    /// Run input document; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output format (json, table)
    #[arg(short, long, env = "WRAPIFY_OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, env = "WRAPIFY_PRETTY")]
    pub pretty: bool,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Input file path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
