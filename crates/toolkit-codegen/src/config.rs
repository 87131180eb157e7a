//! Generator configuration.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::GeneratorConfig;
//!
//! let config = GeneratorConfig::builder()
//!     .path("src/tools")
//!     .suffix("_tool.rs")
//!     .strict(true)
//!     .build();
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.output_suffix(), "_tool.rs");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default suffix of generated files.
pub const DEFAULT_SUFFIX: &str = "_gen.rs";

/// Default doc-line prefix marking a tool type.
pub const DEFAULT_MARKER_PREFIX: &str = "+tool:";

/// Default doc-line prefix of a field annotation.
pub const DEFAULT_ANNOTATION_PREFIX: &str = "+arg:";

/// Default name of the argument container type.
pub const DEFAULT_CAPABILITY_TYPE: &str = "ToolArgs";

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_PATH: &str = "::toolkit";

/// Settings for one generator run.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes:
///
/// ```toml
/// paths = ["src/tools"]
/// suffix = "_gen.rs"
/// strict = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct GeneratorConfig {
    /// Directories (or single files) to scan
    pub paths: Vec<PathBuf>,

    /// Replaces `.rs` in the source file name to form the output name
    pub suffix: String,

    /// Doc-line prefix marking a tool type
    pub marker_prefix: String,

    /// Doc-line prefix of a field annotation
    pub annotation_prefix: String,

    /// Name of the argument container type expected as first field
    pub capability_type: String,

    /// Path of the runtime crate used in generated code
    pub runtime_path: String,

    /// Treat argument extraction failures as fatal
    pub strict: bool,

    /// Continue generating other tools after a per-tool error
    pub keep_going: bool,

    /// Render and validate without writing files
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            suffix: DEFAULT_SUFFIX.to_string(),
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
            annotation_prefix: DEFAULT_ANNOTATION_PREFIX.to_string(),
            capability_type: DEFAULT_CAPABILITY_TYPE.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            strict: false,
            keep_going: false,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid TOML or contains
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config {
            message: format!("invalid configuration file: {e}"),
        })
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the output file suffix.
    #[must_use]
    pub fn output_suffix(&self) -> &str {
        &self.suffix
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(config_error("at least one path to scan is required"));
        }

        if let Some(path) = self.paths.iter().find(|p| p.as_os_str().is_empty()) {
            return Err(config_error(format!(
                "scan path cannot be empty (got {path:?})"
            )));
        }

        if !self.suffix.ends_with(".rs") || self.suffix == ".rs" {
            return Err(config_error(format!(
                "suffix `{}` must end with `.rs` and add something before it",
                self.suffix
            )));
        }

        if self.suffix.contains(['/', '\\']) {
            return Err(config_error(format!(
                "suffix `{}` cannot contain path separators",
                self.suffix
            )));
        }

        if self.marker_prefix.trim().is_empty() {
            return Err(config_error("marker prefix cannot be empty"));
        }

        if self.annotation_prefix.trim().is_empty() {
            return Err(config_error("annotation prefix cannot be empty"));
        }

        if syn::parse_str::<syn::Ident>(&self.capability_type).is_err() {
            return Err(config_error(format!(
                "capability type `{}` is not an identifier",
                self.capability_type
            )));
        }

        if syn::parse_str::<syn::Path>(&self.runtime_path).is_err() {
            return Err(config_error(format!(
                "runtime path `{}` is not a valid path",
                self.runtime_path
            )));
        }

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder starting from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration.
    #[must_use]
    pub const fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Adds a path to scan.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.paths.push(path.into());
        self
    }

    /// Replaces the paths to scan.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the output suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.suffix = suffix.into();
        self
    }

    /// Sets the marker prefix.
    #[must_use]
    pub fn marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.marker_prefix = prefix.into();
        self
    }

    /// Sets the annotation prefix.
    #[must_use]
    pub fn annotation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.annotation_prefix = prefix.into();
        self
    }

    /// Sets the capability type name.
    #[must_use]
    pub fn capability_type(mut self, name: impl Into<String>) -> Self {
        self.config.capability_type = name.into();
        self
    }

    /// Sets the runtime crate path.
    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.config.runtime_path = path.into();
        self
    }

    /// Enables strict extraction.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Enables collecting per-tool errors instead of stopping.
    #[must_use]
    pub const fn keep_going(mut self, keep_going: bool) -> Self {
        self.config.keep_going = keep_going;
        self
    }

    /// Enables dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.config.dry_run = dry_run;
        self
    }

    /// Builds the configuration without validating it.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
