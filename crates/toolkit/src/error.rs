//! Error types for the tool runtime.

use thiserror::Error;

/// Errors raised while registering or dispatching tools.
#[derive(Error, Debug)]
pub enum ToolkitError {
    /// A tool reported an empty name from its definition.
    #[error("tool name cannot be empty")]
    EmptyToolName,

    /// No tool is registered under the requested name.
    #[error("tool '{name}' not found")]
    ToolNotFound {
        /// Name the caller asked for
        name: String,
    },

    /// The raw argument payload could not be decoded into the tool's
    /// argument type.
    #[error("invalid tool arguments: {source}")]
    InvalidArguments {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl ToolkitError {
    /// Returns `true` if the error is an unknown-tool lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit::ToolkitError;
    ///
    /// let err = ToolkitError::ToolNotFound { name: "geocode".to_string() };
    /// assert!(err.is_not_found());
    /// assert!(!ToolkitError::EmptyToolName.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. })
    }
}

/// Result type alias for tool runtime operations.
pub type Result<T> = std::result::Result<T, ToolkitError>;
