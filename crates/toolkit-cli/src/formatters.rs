//! Report formatters.
//!
//! `json` and `text` serialize the [`GenerationReport`] as-is; `pretty`
//! prints one colored line per tool and a summary.

use crate::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use toolkit_codegen::GenerationReport;

/// Message printed when a scan finds nothing to generate.
pub const NO_TOOLS_MESSAGE: &str = "no tools found";

pub fn format_report(report: &GenerationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(report),
        OutputFormat::Text => text::format(report),
        OutputFormat::Pretty => Ok(pretty::format(report)),
    }
}

pub mod json {
    use super::{Result, Serialize};

    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }

    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string(data)?;
        Ok(json)
    }
}

pub mod text {
    use super::{Result, Serialize, json};

    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

pub mod pretty {
    use super::{Colorize, GenerationReport, NO_TOOLS_MESSAGE};
    use std::fmt::Write as _;
    use toolkit_codegen::ToolStatus;

    #[must_use]
    pub fn format(report: &GenerationReport) -> String {
        if report.is_empty() {
            return format!(
                "{} ({} files scanned)",
                NO_TOOLS_MESSAGE.yellow(),
                report.files_scanned
            );
        }

        let mut out = String::new();
        for outcome in &report.outcomes {
            let status = match &outcome.status {
                ToolStatus::Generated => "generated".green().bold(),
                ToolStatus::Rendered => "rendered".cyan().bold(),
                ToolStatus::Failed { .. } => "failed".red().bold(),
            };
            let _ = write!(
                out,
                "{status:>9} {} ({}) -> {}",
                outcome.tool.bold(),
                outcome.schema_name,
                outcome.output_path.display()
            );
            let _ = write!(
                out,
                " [{} args, {} required, {}]",
                outcome.arguments, outcome.required, outcome.resolution
            );
            if let ToolStatus::Failed { error } = &outcome.status {
                let _ = write!(out, "\n          {}", error.red());
            }
            out.push('\n');
        }

        let mut summary = format!(
            "{} tools, {} files scanned",
            report.outcomes.len(),
            report.files_scanned
        );
        if report.has_failures() {
            let _ = write!(summary, ", {} failed", report.failed_count());
        }
        if report.dry_run {
            summary.push_str(" (dry run, nothing written)");
        }
        out.push_str(&summary.dimmed().to_string());
        out
    }
}
