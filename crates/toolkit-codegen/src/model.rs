//! Discovered tools and their arguments.

use crate::error::ExtractionError;
use crate::source::StructStyle;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::path::{Path, PathBuf};
use toolkit::SchemaType;

/// One parameter of a tool, taken from a field of its arguments struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Field name in the arguments struct
    pub field_identifier: String,
    /// Parameter name shown to the model
    pub exposed_name: String,
    /// Parameter description (may be empty)
    pub description: String,
    /// Whether the model must supply this parameter
    pub required: bool,
    /// Schema type tag
    pub schema_type: SchemaType,
}

impl Argument {
    /// Creates a required argument exposed under its field name.
    #[must_use]
    pub fn new(field_identifier: impl Into<String>, schema_type: SchemaType) -> Self {
        let field_identifier = field_identifier.into();
        Self {
            exposed_name: field_identifier.clone(),
            field_identifier,
            description: String::new(),
            required: true,
            schema_type,
        }
    }
}

/// Outcome of looking up and extracting a tool's arguments struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentResolution {
    /// The tool has no fields, so there is nothing to resolve
    NotRequired,
    /// Discovery found an arguments type; extraction has not run yet
    Pending,
    /// Arguments were extracted
    Resolved,
    /// No declaration with the arguments type name exists in the scanned trees
    Missing,
    /// The declaration exists but could not be extracted
    Failed(ExtractionError),
}

impl ArgumentResolution {
    /// Returns a short label for reports and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotRequired => "not-required",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Missing => "missing",
            Self::Failed(_) => "failed",
        }
    }

    /// Returns `true` for [`ArgumentResolution::Failed`].
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ArgumentResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(err) => write!(f, "failed: {err}"),
            other => f.write_str(other.kind()),
        }
    }
}

/// Layout facts the constructor template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolShape {
    /// Struct style of the tool type
    pub style: StructStyle,
    /// Accessor of the `ToolArgs` field, `None` for field-less tools
    pub capability_field: Option<String>,
    /// Whether more fields follow the capability field
    pub has_extra_fields: bool,
}

impl ToolShape {
    /// Shape of a tool without fields.
    #[must_use]
    pub const fn fieldless(style: StructStyle) -> Self {
        Self {
            style,
            capability_field: None,
            has_extra_fields: false,
        }
    }
}

/// A type marked for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// File the tool type was declared in
    pub source_path: PathBuf,
    /// Declared type name
    pub type_name: String,
    /// Function name shown to the model
    pub schema_name: String,
    /// Function description shown to the model
    pub description: String,
    /// Name of the arguments struct, empty for field-less tools
    pub arguments_type_name: String,
    /// Module segments relative to the source file's directory
    pub module_path: Vec<String>,
    /// Struct layout
    pub shape: ToolShape,
    /// Current state of argument extraction
    pub resolution: ArgumentResolution,
    arguments: BTreeMap<String, Argument>,
}

impl Tool {
    /// Creates a tool with no arguments.
    #[must_use]
    pub fn new(source_path: impl Into<PathBuf>, type_name: impl Into<String>, shape: ToolShape) -> Self {
        Self {
            source_path: source_path.into(),
            type_name: type_name.into(),
            schema_name: String::new(),
            description: String::new(),
            arguments_type_name: String::new(),
            module_path: Vec::new(),
            shape,
            resolution: ArgumentResolution::NotRequired,
            arguments: BTreeMap::new(),
        }
    }

    /// Adds an argument keyed by field identifier.
    ///
    /// Returns `false` and keeps the existing entry if the identifier is
    /// already present.
    pub fn add_argument(&mut self, argument: Argument) -> bool {
        match self.arguments.entry(argument.field_identifier.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(argument);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Replaces the argument set.
    pub fn set_arguments(&mut self, arguments: impl IntoIterator<Item = Argument>) {
        self.arguments.clear();
        for argument in arguments {
            self.add_argument(argument);
        }
    }

    /// Removes all arguments.
    pub fn clear_arguments(&mut self) {
        self.arguments.clear();
    }

    /// Returns the arguments sorted by field identifier.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.values()
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of required arguments.
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.arguments.values().filter(|a| a.required).count()
    }

    /// Returns the exposed names of required arguments, sorted.
    #[must_use]
    pub fn required_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .arguments
            .values()
            .filter(|a| a.required)
            .map(|a| a.exposed_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` if discovery found an arguments type.
    #[must_use]
    pub fn needs_arguments(&self) -> bool {
        !self.arguments_type_name.is_empty()
    }
}

/// Discovered tools keyed by declared type name.
///
/// The first discovery of a name wins; later duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    tools: BTreeMap<String, Tool>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool unless its type name is already registered.
    ///
    /// Returns `true` if the tool was added.
    pub fn add(&mut self, tool: Tool) -> bool {
        match self.tools.entry(tool.type_name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(tool);
                true
            }
            Entry::Occupied(existing) => {
                tracing::debug!(
                    tool = %tool.type_name,
                    first = %existing.get().source_path.display(),
                    duplicate = %tool.source_path.display(),
                    "duplicate tool declaration ignored"
                );
                false
            }
        }
    }

    /// Looks up a tool by type name.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&Tool> {
        self.tools.get(type_name)
    }

    /// Iterates over tools in type-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Iterates mutably over tools in type-name order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tool> {
        self.tools.values_mut()
    }

    /// Groups tools by declaring file.
    ///
    /// Files come in path order and tools within a file in type-name order.
    #[must_use]
    pub fn by_source_file(&self) -> BTreeMap<&Path, Vec<&Tool>> {
        let mut groups: BTreeMap<&Path, Vec<&Tool>> = BTreeMap::new();
        for tool in self.tools.values() {
            groups.entry(tool.source_path.as_path()).or_default().push(tool);
        }
        groups
    }

    /// Returns the number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns `true` if no tools were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
