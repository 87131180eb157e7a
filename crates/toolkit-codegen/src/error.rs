//! Error types for tool code generation.
//!
//! [`Error`] covers everything that aborts a run: unreadable or unparsable
//! sources, bad configuration, template failures and output that cannot be
//! written. [`ExtractionError`] describes why an arguments struct could not
//! be turned into a parameter list; it is recorded on the tool and only
//! becomes fatal in strict mode.
//!
//! # Examples
//!
//! ```
//! use toolkit_codegen::{Error, Result};
//!
//! fn check_suffix(suffix: &str) -> Result<()> {
//!     if !suffix.ends_with(".rs") {
//!         return Err(Error::Config {
//!             message: format!("suffix `{suffix}` must end with .rs"),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_suffix("_gen.txt").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use crate::annotation::AnnotationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the generator.
#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Rust.
    #[error("{}:{line}:{column}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// 1-based line of the syntax error
        line: usize,
        /// 0-based column of the syntax error
        column: usize,
        /// Underlying syntax error
        #[source]
        source: syn::Error,
    },

    /// A directory tree could not be walked.
    #[error("failed to walk source tree: {source}")]
    WalkDir {
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// Configuration is invalid.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Argument extraction failed for a tool (strict mode only).
    #[error("argument extraction failed for tool `{tool}`: {source}")]
    Extraction {
        /// Declared type name of the tool
        tool: String,
        /// Why extraction failed
        #[source]
        source: ExtractionError,
    },

    /// A tool reached generation without a schema name.
    ///
    /// Raised when the marked type has no `+tool:name=` directive.
    #[error("tool `{tool}` has no schema name (missing `+tool:name=` directive)")]
    MissingSchemaName {
        /// Declared type name of the tool
        tool: String,
    },

    /// Template registration or rendering failed.
    #[error("template error: {message}")]
    Template {
        /// Description of the template failure
        message: String,
    },

    /// Rendered output is not valid Rust.
    #[error("generated code for {} does not parse: {source}", path.display())]
    InvalidOutput {
        /// Output path the module was rendered for
        path: PathBuf,
        /// Syntax error reported for the rendered text
        #[source]
        source: syn::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this error came from reading or parsing sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use toolkit_codegen::Error;
    ///
    /// let err = Error::Io {
    ///     path: PathBuf::from("tools/weather.rs"),
    ///     source: std::io::Error::other("denied"),
    /// };
    /// assert!(err.is_scan_error());
    /// ```
    #[must_use]
    pub const fn is_scan_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Parse { .. } | Self::WalkDir { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if this is a strict-mode extraction failure.
    #[must_use]
    pub const fn is_extraction_error(&self) -> bool {
        matches!(self, Self::Extraction { .. })
    }

    /// Returns `true` if this error happened while producing output.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_codegen::Error;
    ///
    /// let err = Error::MissingSchemaName {
    ///     tool: "WeatherTool".to_string(),
    /// };
    /// assert!(err.is_generation_error());
    /// assert!(!err.is_scan_error());
    /// ```
    #[must_use]
    pub const fn is_generation_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSchemaName { .. }
                | Self::Template { .. }
                | Self::InvalidOutput { .. }
                | Self::Write { .. }
        )
    }

    pub(crate) fn parse(path: PathBuf, source: syn::Error) -> Self {
        let start = source.span().start();
        Self::Parse {
            path,
            line: start.line,
            column: start.column,
            source,
        }
    }
}

/// Why the fields of an arguments struct could not be extracted.
///
/// Any of these leaves the tool with an empty parameter list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A field has no `+arg:` annotation.
    #[error("field `{field}` of `{type_name}` has no annotation")]
    MissingAnnotation {
        /// Arguments struct name
        type_name: String,
        /// Field identifier
        field: String,
    },

    /// A field annotation is malformed.
    #[error("field `{field}` of `{type_name}` has a malformed annotation: {source}")]
    MalformedAnnotation {
        /// Arguments struct name
        type_name: String,
        /// Field identifier
        field: String,
        /// Parser diagnostic
        #[source]
        source: AnnotationError,
    },

    /// A field type has no schema mapping.
    #[error("field `{field}` of `{type_name}` has unsupported type `{rust_type}`")]
    UnsupportedType {
        /// Arguments struct name
        type_name: String,
        /// Field identifier
        field: String,
        /// Type name as written
        rust_type: String,
    },

    /// The arguments type is declared, but not as a struct.
    #[error("arguments type `{type_name}` is not a struct")]
    NotAStruct {
        /// Arguments type name
        type_name: String,
    },

    /// The arguments struct has unnamed fields, which decode from an array.
    #[error("arguments type `{type_name}` has unnamed fields; parameters need named fields")]
    UnnamedFields {
        /// Arguments struct name
        type_name: String,
    },

    /// The annotation's `name` differs from the key the field decodes from.
    #[error(
        "field `{field}` of `{type_name}` is exposed as `{annotated}` but decodes from `{decoded}`"
    )]
    NameMismatch {
        /// Arguments struct name
        type_name: String,
        /// Field identifier
        field: String,
        /// Name given by the annotation
        annotated: String,
        /// Key serde reads the field from
        decoded: String,
    },

    /// An optional parameter has no serde default to fall back on.
    #[error("field `{field}` of `{type_name}` is optional but has no `#[serde(default)]`")]
    OptionalWithoutDefault {
        /// Arguments struct name
        type_name: String,
        /// Field identifier
        field: String,
    },

    /// Two fields expose the same parameter name.
    #[error("arguments type `{type_name}` exposes parameter `{name}` more than once")]
    DuplicateExposedName {
        /// Arguments struct name
        type_name: String,
        /// Duplicated exposed name
        name: String,
    },
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
