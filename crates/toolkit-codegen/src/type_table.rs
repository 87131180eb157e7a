//! Rust type name to schema type mapping.

use std::collections::BTreeMap;
use toolkit::SchemaType;

/// Closed mapping from Rust type names to schema type tags.
///
/// Lookups use the last path segment of a field type, so `String`,
/// `std::string::String` and `alloc::string::String` all resolve the same
/// way. Generic arguments are not inspected: `Vec<String>` maps through
/// `Vec` alone.
///
/// # Examples
///
/// ```
/// use toolkit::SchemaType;
/// use toolkit_codegen::TypeTable;
///
/// let table = TypeTable::default();
/// assert_eq!(table.lookup("f64"), Some(SchemaType::Number));
/// assert_eq!(table.lookup("u8"), None);
///
/// let table = table.with_mapping("u32", SchemaType::Integer);
/// assert_eq!(table.lookup("u32"), Some(SchemaType::Integer));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    mappings: BTreeMap<String, SchemaType>,
}

impl TypeTable {
    /// Creates a table with no mappings.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            mappings: BTreeMap::new(),
        }
    }

    /// Creates the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        [
            ("String", SchemaType::String),
            ("str", SchemaType::String),
            ("i32", SchemaType::Integer),
            ("i64", SchemaType::Integer),
            ("f64", SchemaType::Number),
            ("bool", SchemaType::Boolean),
            ("Map", SchemaType::Object),
            ("Vec", SchemaType::Array),
        ]
        .into_iter()
        .fold(Self::empty(), |table, (name, ty)| table.with_mapping(name, ty))
    }

    /// Adds or replaces a mapping.
    #[must_use]
    pub fn with_mapping(mut self, name: impl Into<String>, schema_type: SchemaType) -> Self {
        self.mappings.insert(name.into(), schema_type);
        self
    }

    /// Looks up a type name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<SchemaType> {
        self.mappings.get(name).copied()
    }

    /// Returns the number of mapped names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns `true` if the table has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mappings() {
        let table = TypeTable::builtin();
        assert_eq!(table.lookup("String"), Some(SchemaType::String));
        assert_eq!(table.lookup("str"), Some(SchemaType::String));
        assert_eq!(table.lookup("i32"), Some(SchemaType::Integer));
        assert_eq!(table.lookup("i64"), Some(SchemaType::Integer));
        assert_eq!(table.lookup("f64"), Some(SchemaType::Number));
        assert_eq!(table.lookup("bool"), Some(SchemaType::Boolean));
        assert_eq!(table.lookup("Map"), Some(SchemaType::Object));
        assert_eq!(table.lookup("Vec"), Some(SchemaType::Array));
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_unmapped_names() {
        let table = TypeTable::default();
        assert_eq!(table.lookup("f32"), None);
        assert_eq!(table.lookup("HashMap"), None);
        assert_eq!(table.lookup("Option"), None);
        assert_eq!(table.lookup("string"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = TypeTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("String"), None);
    }

    #[test]
    fn test_mapping_replaces_existing() {
        let table = TypeTable::builtin().with_mapping("Vec", SchemaType::Object);
        assert_eq!(table.lookup("Vec"), Some(SchemaType::Object));
        assert_eq!(table.len(), 8);
    }
}
