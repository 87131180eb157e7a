//! Tool contract and the typed argument container.

use crate::error::{Result, ToolkitError};
use crate::schema::FunctionDefinition;
use serde::de::DeserializeOwned;

/// Typed argument storage embedded as the first field of every tool.
///
/// Starts empty; [`ToolArgs::parse_arguments`] decodes the raw JSON payload
/// the model produced for a call.
///
/// # Examples
///
/// ```
/// use serde::Deserialize;
/// use toolkit::ToolArgs;
///
/// #[derive(Debug, Deserialize)]
/// struct GeocodeArgs {
///     address: String,
/// }
///
/// let mut args = ToolArgs::<GeocodeArgs>::default();
/// assert!(args.arguments().is_none());
///
/// args.parse_arguments(r#"{"address": "Karl Johans gate 1"}"#).unwrap();
/// assert_eq!(args.arguments().unwrap().address, "Karl Johans gate 1");
/// ```
#[derive(Debug, Clone)]
pub struct ToolArgs<T> {
    args: Option<T>,
}

impl<T> ToolArgs<T> {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self { args: None }
    }

    /// Returns the decoded arguments of the last successful parse.
    #[must_use]
    pub const fn arguments(&self) -> Option<&T> {
        self.args.as_ref()
    }

    /// Returns `true` once arguments have been decoded.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.args.is_some()
    }
}

impl<T: DeserializeOwned> ToolArgs<T> {
    /// Decodes a raw JSON payload into the container.
    ///
    /// On failure the previously decoded value is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidArguments`] if the payload is not
    /// valid JSON for `T`.
    pub fn parse_arguments(&mut self, raw: &str) -> Result<()> {
        let args = serde_json::from_str(raw)
            .map_err(|source| ToolkitError::InvalidArguments { source })?;
        self.args = Some(args);
        Ok(())
    }
}

impl<T> Default for ToolArgs<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes a tool to the model.
pub trait Definable {
    /// Returns the tool's function definition.
    fn definition(&self) -> FunctionDefinition;
}

/// Accepts the raw argument payload of a tool call.
pub trait Parsable {
    /// Decodes `raw` into the tool's argument container.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload does not match the argument type.
    fn parse_arguments(&mut self, raw: &str) -> Result<()>;
}

/// Runs a tool with its previously parsed arguments.
pub trait Executable {
    /// Executes the tool and returns the text handed back to the model.
    fn execute(&self) -> String;
}

/// A complete tool: definable, parsable and executable.
pub trait Callable: Definable + Parsable + Executable {}

impl<T: Definable + Parsable + Executable> Callable for T {}
