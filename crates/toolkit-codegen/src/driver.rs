//! Generation driver.
//!
//! Runs discovery, argument resolution and rendering in order and applies
//! the failure policy from [`GeneratorConfig`]. Tools declared in the same
//! source file share one generated module.
//!
//! - by default the first generation error aborts the run, and argument
//!   extraction failures only produce tools without parameters
//! - `strict` makes any extraction failure abort the run before anything
//!   is written
//! - `keep_going` records generation errors in the report and carries on;
//!   a module that cannot be rendered or written fails every tool in it
//!
//! # Examples
//!
//! ```no_run
//! use toolkit_codegen::{Driver, GeneratorConfig};
//!
//! # fn example() -> toolkit_codegen::Result<()> {
//! let config = GeneratorConfig::builder()
//!     .path("src/tools")
//!     .keep_going(true)
//!     .build();
//!
//! let report = Driver::new(config)?.run()?;
//! for outcome in &report.outcomes {
//!     println!("{}: {}", outcome.tool, outcome.status);
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::generator::ToolGenerator;
use crate::model::{ArgumentResolution, Tool};
use crate::scanner::{ToolScanner, output_path};
use crate::type_table::TypeTable;
use crate::types::ToolContext;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// What happened to one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolStatus {
    /// The file was written
    Generated,
    /// The file was rendered but not written (dry run)
    Rendered,
    /// Generation failed and the run kept going
    Failed {
        /// Error message
        error: String,
    },
}

impl ToolStatus {
    /// Returns `true` for [`ToolStatus::Failed`].
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated => f.write_str("generated"),
            Self::Rendered => f.write_str("rendered"),
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

/// Per-tool entry of a [`GenerationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    /// Declared type name
    pub tool: String,
    /// Function name shown to the model
    pub schema_name: String,
    /// File the tool was declared in
    pub source_path: PathBuf,
    /// Generated file path
    pub output_path: PathBuf,
    /// Number of parameters
    pub arguments: usize,
    /// Number of required parameters
    pub required: usize,
    /// Argument resolution kind (`resolved`, `missing`, ...)
    pub resolution: String,
    /// Result of generation
    #[serde(flatten)]
    pub status: ToolStatus,
}

/// Summary of a generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Number of `.rs` files parsed
    pub files_scanned: usize,
    /// Whether files were left unwritten
    pub dry_run: bool,
    /// One entry per discovered tool, in type-name order
    pub outcomes: Vec<ToolOutcome>,
}

impl GenerationReport {
    /// Returns `true` if no tools were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the number of tools rendered successfully.
    #[must_use]
    pub fn generated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.status.is_failed()).count()
    }

    /// Returns the number of tools that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_failed()).count()
    }

    /// Returns `true` if any tool failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.status.is_failed())
    }
}

/// Runs the generator.
#[derive(Debug)]
pub struct Driver {
    config: GeneratorConfig,
    scanner: ToolScanner,
    generator: ToolGenerator,
}

impl Driver {
    /// Creates a driver for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid and
    /// [`Error::Template`] if the template fails to register.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let scanner = ToolScanner::new(&config);
        let generator = ToolGenerator::new(&config)?;
        Ok(Self {
            config,
            scanner,
            generator,
        })
    }

    /// Replaces the type table used for argument extraction.
    #[must_use]
    pub fn with_type_table(mut self, type_table: TypeTable) -> Self {
        self.scanner = self.scanner.with_type_table(type_table);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Scans, resolves, renders and writes.
    ///
    /// # Errors
    ///
    /// Returns scan errors, [`Error::Extraction`] in strict mode, and the
    /// first generation error unless `keep_going` is set.
    pub fn run(&self) -> Result<GenerationReport> {
        let mut scan = self.scanner.scan(&self.config.paths)?;
        let mut report = GenerationReport {
            files_scanned: scan.files_scanned,
            dry_run: self.config.dry_run,
            outcomes: Vec::new(),
        };

        if scan.registry.is_empty() {
            tracing::info!(files = scan.files_scanned, "no tools found");
            return Ok(report);
        }

        self.scanner.resolve_arguments(&mut scan);

        if self.config.strict
            && let Some((tool, err)) = scan.registry.iter().find_map(|t| match &t.resolution {
                ArgumentResolution::Failed(err) => Some((t, err)),
                _ => None,
            })
        {
            return Err(Error::Extraction {
                tool: tool.type_name.clone(),
                source: err.clone(),
            });
        }

        for (source_path, tools) in scan.registry.by_source_file() {
            self.generate_module(source_path, &tools, &mut report)?;
        }
        report.outcomes.sort_by(|a, b| a.tool.cmp(&b.tool));

        tracing::info!(
            tools = report.outcomes.len(),
            generated = report.generated_count(),
            failed = report.failed_count(),
            "generation finished"
        );
        Ok(report)
    }

    /// Renders and writes the module for one source file, recording an
    /// outcome for each of its tools.
    fn generate_module(
        &self,
        source_path: &Path,
        tools: &[&Tool],
        report: &mut GenerationReport,
    ) -> Result<()> {
        let path = output_path(source_path, &self.config.suffix);
        let mut contexts: Vec<ToolContext> = Vec::with_capacity(tools.len());
        let mut included = Vec::with_capacity(tools.len());

        for &tool in tools {
            match self.generator.context(tool) {
                Ok(context) => {
                    contexts.push(context);
                    included.push(tool);
                }
                Err(err) => {
                    let status = self.recover(&tool.type_name, err)?;
                    report.outcomes.push(outcome(tool, &path, status));
                }
            }
        }

        if contexts.is_empty() {
            return Ok(());
        }

        let status = match self.write_module(source_path, &contexts) {
            Ok(status) => status,
            Err(err) => self.recover(&type_names(&contexts), err)?,
        };
        for tool in included {
            report.outcomes.push(outcome(tool, &path, status.clone()));
        }
        Ok(())
    }

    fn write_module(&self, source_path: &Path, contexts: &[ToolContext]) -> Result<ToolStatus> {
        let file = self.generator.render_module(source_path, contexts)?;

        if self.config.dry_run {
            tracing::info!(tools = ?file.tools, path = %file.path.display(), "rendered (dry run)");
            return Ok(ToolStatus::Rendered);
        }

        ToolGenerator::write(&file)?;
        tracing::info!(tools = ?file.tools, path = %file.path.display(), "generated");
        Ok(ToolStatus::Generated)
    }

    /// Turns a generation error into a failed status under `keep_going`.
    fn recover(&self, tools: &str, err: Error) -> Result<ToolStatus> {
        if !self.config.keep_going {
            return Err(err);
        }
        tracing::error!(tools, "generation failed: {err}");
        Ok(ToolStatus::Failed {
            error: err.to_string(),
        })
    }
}

fn type_names(contexts: &[ToolContext]) -> String {
    contexts
        .iter()
        .map(|c| c.type_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn outcome(tool: &Tool, output_path: &Path, status: ToolStatus) -> ToolOutcome {
    ToolOutcome {
        tool: tool.type_name.clone(),
        schema_name: tool.schema_name.clone(),
        source_path: tool.source_path.clone(),
        output_path: output_path.to_path_buf(),
        arguments: tool.argument_count(),
        required: tool.required_count(),
        resolution: tool.resolution.kind().to_string(),
        status,
    }
}
