//! Run logic and logging initialization.

use anyhow::{Context, Result};
use toolkit_codegen::{Driver, GeneratorConfig, GeneratorConfigBuilder};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, ExitCode, LogFormat};
use crate::formatters::format_report;

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling
/// back to `info`. Log lines go to stderr so stdout carries only the report.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, format: LogFormat) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let (text, json) = match format {
        LogFormat::Text => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Builds the generator configuration: the `--config` file when given,
/// otherwise defaults, with command-line flags applied on top.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or parsed.
pub fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let base = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let mut builder = GeneratorConfigBuilder::from_config(base);
    if !cli.paths.is_empty() {
        builder = builder.paths(cli.paths.iter().cloned());
    }
    if let Some(suffix) = &cli.suffix {
        builder = builder.suffix(suffix.clone());
    }
    if cli.strict {
        builder = builder.strict(true);
    }
    if cli.keep_going {
        builder = builder.keep_going(true);
    }
    if cli.dry_run {
        builder = builder.dry_run(true);
    }

    Ok(builder.build())
}

/// Runs the generator and prints the report to stdout.
///
/// A run that finds no tools still succeeds. With `--keep-going`, any
/// failed tool turns the exit code into [`ExitCode::ERROR`].
///
/// # Errors
///
/// Returns an error for invalid configuration and for scan, strict
/// extraction and generation failures.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = build_config(cli)?;
    tracing::debug!(?config, "resolved configuration");

    let report = Driver::new(config)?.run()?;
    println!("{}", format_report(&report, cli.format)?);

    if report.has_failures() {
        return Ok(ExitCode::ERROR);
    }
    Ok(ExitCode::SUCCESS)
}

/// Maps a run error to an exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<toolkit_codegen::Error>() {
        Some(err) if err.is_config_error() => ExitCode::INVALID_INPUT,
        _ => ExitCode::ERROR,
    }
}
