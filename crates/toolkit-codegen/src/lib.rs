//! Code generation for chat-completion function tools.
//!
//! Scans Rust source trees for struct declarations marked with a
//! `+tool:` doc directive, resolves each one to its arguments struct and
//! renders a sibling module with the tool's schema definition and a
//! constructor, using Handlebars templates.
//!
//! # Pipeline
//!
//! 1. [`ToolScanner::scan`] walks every `.rs` file once, collecting marked
//!    tools into a [`Registry`] and every type declaration into a
//!    [`TypeIndex`]
//! 2. [`ToolScanner::resolve_arguments`] looks up each tool's arguments
//!    type in the index and extracts its fields through the
//!    [`annotation`] parser and the [`TypeTable`]
//! 3. [`ToolGenerator`] renders one file per source file, holding every
//!    tool declared there
//!
//! [`Driver`] runs all three steps with the failure policy taken from
//! [`GeneratorConfig`].
//!
//! # Examples
//!
//! ```no_run
//! use toolkit_codegen::{Driver, GeneratorConfig};
//!
//! # fn example() -> toolkit_codegen::Result<()> {
//! let config = GeneratorConfig::builder().path("src/tools").build();
//! let report = Driver::new(config)?.run()?;
//! println!("generated {} tools", report.generated_count());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod annotation;
pub mod config;
pub mod directive;
pub mod driver;
pub mod error;
pub mod generator;
pub mod model;
pub mod scanner;
pub mod source;
pub mod template_engine;
pub mod type_table;
pub mod types;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use driver::{Driver, GenerationReport, ToolOutcome, ToolStatus};
pub use error::{Error, ExtractionError, Result};
pub use generator::ToolGenerator;
pub use model::{Argument, ArgumentResolution, Registry, Tool, ToolShape};
pub use scanner::{Scan, ToolScanner, TypeIndex};
pub use type_table::TypeTable;
pub use types::GeneratedFile;
