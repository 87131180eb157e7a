//! Runtime support for chat-completion function tools.
//!
//! This crate holds the types that generated tool modules refer to:
//!
//! - [`FunctionDefinition`], [`ParameterSchema`], [`PropertySchema`] and
//!   [`SchemaType`] describe a tool to the model
//! - [`ToolArgs`] is the typed argument container a tool struct embeds as
//!   its first field
//! - [`Definable`], [`Parsable`], [`Executable`] and [`Callable`] are the
//!   tool contract
//! - [`Toolkit`] is a name-keyed registry that dispatches tool calls
//!
//! # Examples
//!
//! ```
//! use serde::Deserialize;
//! use toolkit::{
//!     Definable, Executable, FunctionDefinition, ParameterSchema, Parsable, SchemaType,
//!     ToolArgs, Toolkit,
//! };
//!
//! #[derive(Debug, Deserialize)]
//! struct EchoArgs {
//!     text: String,
//! }
//!
//! #[derive(Debug, Default)]
//! struct EchoTool {
//!     args: ToolArgs<EchoArgs>,
//! }
//!
//! impl Definable for EchoTool {
//!     fn definition(&self) -> FunctionDefinition {
//!         FunctionDefinition::new(
//!             "echo",
//!             "Echoes its input",
//!             ParameterSchema::object()
//!                 .property("text", SchemaType::String, "Text to echo")
//!                 .required(&["text"]),
//!         )
//!     }
//! }
//!
//! impl Parsable for EchoTool {
//!     fn parse_arguments(&mut self, raw: &str) -> toolkit::Result<()> {
//!         self.args.parse_arguments(raw)
//!     }
//! }
//!
//! impl Executable for EchoTool {
//!     fn execute(&self) -> String {
//!         self.args.arguments().map(|a| a.text.clone()).unwrap_or_default()
//!     }
//! }
//!
//! let mut toolkit = Toolkit::new();
//! toolkit.register_tool(EchoTool::default())?;
//! assert_eq!(toolkit.execute("echo", r#"{"text":"hi"}"#)?, "hi");
//! # Ok::<(), toolkit::ToolkitError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod registry;
mod schema;
mod tool;

pub use error::{Result, ToolkitError};
pub use registry::Toolkit;
pub use schema::{FunctionDefinition, ParameterSchema, PropertySchema, SchemaType};
pub use tool::{Callable, Definable, Executable, Parsable, ToolArgs};
