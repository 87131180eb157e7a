//! Function-tool schema types.
//!
//! These mirror the `function` tool shape understood by chat-completion
//! APIs: a name, a description and an object schema listing parameters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameter type tag understood by the model.
///
/// Serializes in lowercase (`"string"`, `"integer"`, ...).
///
/// # Examples
///
/// ```
/// use toolkit::SchemaType;
///
/// assert_eq!(SchemaType::Number.as_str(), "number");
/// assert_eq!(SchemaType::Number.variant_name(), "Number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// UTF-8 string
    String,
    /// Whole number
    Integer,
    /// Floating-point number
    Number,
    /// `true` or `false`
    Boolean,
    /// Nested JSON object
    Object,
    /// JSON array
    Array,
}

impl SchemaType {
    /// Returns the wire name of the type tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Returns the Rust variant name, as written in generated code.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Object => "Object",
            Self::Array => "Array",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema of a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Type tag
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Human-readable description (may be empty)
    #[serde(default)]
    pub description: String,
}

/// Object schema describing all parameters of a tool.
///
/// Built fluently; the required list is kept sorted and free of duplicates
/// so serialized output is stable.
///
/// # Examples
///
/// ```
/// use toolkit::{ParameterSchema, SchemaType};
///
/// let schema = ParameterSchema::object()
///     .property("location", SchemaType::String, "")
///     .property("days", SchemaType::Integer, "Forecast length")
///     .required(&["location"]);
///
/// assert_eq!(schema.properties.len(), 2);
/// assert_eq!(schema.required, vec!["location".to_string()]);
/// assert!(schema.is_required("location"));
/// assert!(!schema.is_required("days"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Always [`SchemaType::Object`] for tool parameters
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Parameters keyed by exposed name
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names of the parameters the model must supply
    #[serde(default)]
    pub required: Vec<String>,
}

impl ParameterSchema {
    /// Creates an empty object schema.
    #[must_use]
    pub const fn object() -> Self {
        Self {
            schema_type: SchemaType::Object,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    /// Adds a parameter. A later property with the same name replaces the
    /// earlier one.
    #[must_use]
    pub fn property(
        mut self,
        name: impl Into<String>,
        schema_type: SchemaType,
        description: impl Into<String>,
    ) -> Self {
        self.properties.insert(
            name.into(),
            PropertySchema {
                schema_type,
                description: description.into(),
            },
        );
        self
    }

    /// Marks parameters as required.
    #[must_use]
    pub fn required(mut self, names: &[&str]) -> Self {
        self.required.extend(names.iter().map(|n| (*n).to_string()));
        self.required.sort();
        self.required.dedup();
        self
    }

    /// Returns `true` if `name` is in the required list.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self::object()
    }
}

/// Description of a callable tool as sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    /// Tool name the model uses when calling it
    pub name: String,
    /// What the tool does
    pub description: String,
    /// Parameter schema
    pub parameters: ParameterSchema,
}

impl FunctionDefinition {
    /// Creates a definition from its parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ParameterSchema,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_type_serializes_lowercase() {
        let value = serde_json::to_value(SchemaType::Boolean).unwrap();
        assert_eq!(value, json!("boolean"));

        let parsed: SchemaType = serde_json::from_value(json!("array")).unwrap();
        assert_eq!(parsed, SchemaType::Array);
    }

    #[test]
    fn test_required_is_sorted_and_deduped() {
        let schema = ParameterSchema::object()
            .required(&["longitude", "latitude"])
            .required(&["latitude"]);
        assert_eq!(schema.required, vec!["latitude", "longitude"]);
    }

    #[test]
    fn test_property_replaces_same_name() {
        let schema = ParameterSchema::object()
            .property("q", SchemaType::String, "first")
            .property("q", SchemaType::Integer, "second");
        assert_eq!(schema.properties.len(), 1);
        assert_eq!(schema.properties["q"].schema_type, SchemaType::Integer);
    }

    #[test]
    fn test_function_definition_wire_shape() {
        let definition = FunctionDefinition::new(
            "weather_tool",
            "reports weather",
            ParameterSchema::object()
                .property("location", SchemaType::String, "")
                .required(&["location"]),
        );

        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "weather_tool",
                "description": "reports weather",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "location": {"type": "string", "description": ""}
                    },
                    "required": ["location"]
                }
            })
        );
    }

    #[test]
    fn test_empty_schema_default() {
        let schema = ParameterSchema::default();
        assert_eq!(schema.schema_type, SchemaType::Object);
        assert!(schema.properties.is_empty());
        assert!(schema.required.is_empty());
    }
}
