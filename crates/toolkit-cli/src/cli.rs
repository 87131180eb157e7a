//! Command-line arguments and the types they map to.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use toolkit_cli::cli::{Cli, OutputFormat};
//!
//! let cli = Cli::parse_from(["toolkit-tools-gen", "--path", "src/tools", "--format", "json"]);
//! assert_eq!(cli.format, OutputFormat::Json);
//! assert_eq!(cli.paths.len(), 1);
//! ```

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Generates tool schema definitions from annotated Rust sources.
///
/// Every struct documented with a `+tool:` line and holding a
/// `ToolArgs<Args>` as its first field gets a sibling `<file>_gen.rs`
/// module implementing its function definition and a constructor.
#[derive(Parser, Debug)]
#[command(name = "toolkit-tools-gen")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directories or files to scan (repeatable, comma-separated)
    #[arg(
        short = 'p',
        long = "path",
        value_delimiter = ',',
        required_unless_present = "config"
    )]
    pub paths: Vec<PathBuf>,

    /// Output file suffix replacing `.rs` (default: `_gen.rs`)
    #[arg(long)]
    pub suffix: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Abort when any tool's arguments cannot be extracted
    #[arg(long)]
    pub strict: bool,

    /// Record per-tool generation errors and continue
    #[arg(long)]
    pub keep_going: bool,

    /// Render and validate without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

/// Format of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    Json,
    /// Compact JSON on one line
    Text,
    /// Colored human-readable summary
    #[default]
    Pretty,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    pub const SUCCESS: Self = Self(0);

    /// Scan, extraction or generation failure
    pub const ERROR: Self = Self(1);

    /// Bad flags or configuration
    pub const INVALID_INPUT: Self = Self(2);

    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
