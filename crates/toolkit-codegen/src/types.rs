//! Types for code generation.
//!
//! [`GeneratedFile`] carries one rendered module; [`ModuleContext`],
//! [`ToolContext`] and [`PropertyContext`] are what the templates see.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::GeneratedFile;
//!
//! let file = GeneratedFile {
//!     tools: vec!["ForecastTool".to_string(), "WeatherTool".to_string()],
//!     path: "src/tools/weather_gen.rs".into(),
//!     content: "// generated".to_string(),
//! };
//!
//! assert!(file.contains_tool("WeatherTool"));
//! assert_eq!(file.path().file_name().unwrap(), "weather_gen.rs");
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

/// One generated module, holding every tool declared in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Declared type names of the tools, in type-name order
    pub tools: Vec<String>,
    /// Where the file is written
    pub path: PathBuf,
    /// Rendered source text
    pub content: String,
}

impl GeneratedFile {
    /// Returns the output path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the rendered source.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the module implements the named tool.
    #[must_use]
    pub fn contains_tool(&self, type_name: &str) -> bool {
        self.tools.iter().any(|tool| tool == type_name)
    }
}

/// Context for the module template: one per source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleContext {
    /// File name of the declaring source, for the provenance header
    pub source_file: String,
    /// Runtime crate path, e.g. `::toolkit`
    pub runtime_path: String,
    /// Modules glob-imported by the generated file, deduplicated and sorted
    pub imports: Vec<String>,
    /// Tools in type-name order
    pub tools: Vec<ToolContext>,
}

/// Context for the per-tool template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ToolContext {
    /// Declared type name
    pub type_name: String,
    /// Runtime crate path, e.g. `::toolkit`
    pub runtime_path: String,
    /// Module glob-imported by the generated file, e.g. `super::weather`
    pub import_path: String,
    /// Function name shown to the model
    pub schema_name: String,
    /// Function description shown to the model
    pub description: String,
    /// Parameters sorted by field identifier
    pub properties: Vec<PropertyContext>,
    /// Exposed names of required parameters, sorted
    pub required: Vec<String>,
    /// Whether the tool has a `ToolArgs` field
    pub has_capability: bool,
    /// Accessor of the `ToolArgs` field (empty when absent)
    pub capability_field: String,
    /// Arguments struct name (empty when absent)
    pub arguments_type: String,
    /// Whether the constructor uses `Self { .. }` syntax
    pub brace_constructor: bool,
    /// Whether the constructor needs `..Default::default()`
    pub has_extra_fields: bool,
    /// Constructor expression for tools without fields
    pub empty_constructor: String,
}

/// One parameter in the template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyContext {
    /// Exposed parameter name
    pub name: String,
    /// `SchemaType` variant name, e.g. `Number`
    pub schema_variant: String,
    /// Parameter description
    pub description: String,
}
