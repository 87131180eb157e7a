//! Name-keyed tool registry.

use crate::error::{Result, ToolkitError};
use crate::schema::FunctionDefinition;
use crate::tool::{Callable, Definable, Executable, Parsable};
use std::collections::BTreeMap;
use std::fmt;

/// Registry of callable tools keyed by their definition name.
///
/// Registration is first-wins: a second tool reporting an already
/// registered name is ignored. Definitions are returned in name order.
#[derive(Default)]
pub struct Toolkit {
    registry: BTreeMap<String, Box<dyn Callable>>,
}

impl Toolkit {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under the name reported by its definition.
    ///
    /// Returns `true` if the tool was added, `false` if the name was
    /// already taken.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::EmptyToolName`] if the tool's definition has
    /// an empty name.
    pub fn register_tool<T: Callable + 'static>(&mut self, tool: T) -> Result<bool> {
        let name = tool.definition().name;
        if name.is_empty() {
            return Err(ToolkitError::EmptyToolName);
        }

        if self.registry.contains_key(&name) {
            tracing::debug!(tool = %name, "tool already registered, ignoring");
            return Ok(false);
        }

        tracing::debug!(tool = %name, "registered tool");
        self.registry.insert(name, Box::new(tool));
        Ok(true)
    }

    /// Returns the definitions of all registered tools, sorted by name.
    #[must_use]
    pub fn definitions(&self) -> Vec<FunctionDefinition> {
        self.registry.values().map(|t| t.definition()).collect()
    }

    /// Looks up a tool by name.
    #[must_use]
    pub fn tool(&self, name: &str) -> Option<&dyn Callable> {
        self.registry.get(name).map(Box::as_ref)
    }

    /// Parses `raw_args` into the named tool and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::ToolNotFound`] for unknown names and
    /// [`ToolkitError::InvalidArguments`] if the payload does not decode.
    pub fn execute(&mut self, name: &str, raw_args: &str) -> Result<String> {
        let tool = self
            .registry
            .get_mut(name)
            .ok_or_else(|| ToolkitError::ToolNotFound {
                name: name.to_string(),
            })?;

        tool.parse_arguments(raw_args)?;
        Ok(tool.execute())
    }

    /// Returns the registered tool names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit")
            .field("tools", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}
