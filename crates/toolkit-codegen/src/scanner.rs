//! Source tree scanner.
//!
//! Scanning runs in two passes over a single walk:
//!
//! 1. [`ToolScanner::scan`] reads every `.rs` file once, registers each
//!    marked struct as a [`Tool`] and records every type declaration in a
//!    [`TypeIndex`]
//! 2. [`ToolScanner::resolve_arguments`] looks up each tool's arguments
//!    type in the index and extracts its annotated fields
//!
//! Problems with individual declarations are logged and recorded; only
//! I/O and syntax errors abort a scan.

use crate::annotation::Annotation;
use crate::config::GeneratorConfig;
use crate::directive::{DirectiveParser, Directives};
use crate::error::{Error, ExtractionError, Result};
use crate::model::{Argument, ArgumentResolution, Registry, Tool, ToolShape};
use crate::source::{self, Declaration, FieldDecl, StructStyle, TypeRef};
use crate::type_table::TypeTable;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Why a marked declaration was not registered as a tool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Only structs can be tools.
    #[error("tool `{type_name}` is a {kind}, not a struct")]
    NotAStruct {
        /// Declared type name
        type_name: String,
        /// Declaration keyword
        kind: &'static str,
    },

    /// The first field is not `<capability><Args>`.
    #[error("tool `{type_name}` must start with a `{capability}<Args>` field, found `{found}`")]
    MissingCapability {
        /// Declared type name
        type_name: String,
        /// Expected container type name
        capability: String,
        /// First field type as written
        found: String,
    },
}

/// Every type declaration seen during a scan, keyed by name.
///
/// The first declaration of a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeIndex {
    declarations: BTreeMap<String, Declaration>,
}

impl TypeIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration unless its name is already present.
    pub fn insert(&mut self, decl: Declaration) -> bool {
        if self.declarations.contains_key(&decl.name) {
            return false;
        }
        self.declarations.insert(decl.name.clone(), decl);
        true
    }

    /// Looks up a declaration by type name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    /// Returns the number of indexed declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Result of the discovery pass.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Discovered tools
    pub registry: Registry,
    /// All type declarations
    pub index: TypeIndex,
    /// Number of `.rs` files parsed
    pub files_scanned: usize,
}

/// Finds tools and their arguments in source trees.
#[derive(Debug, Clone)]
pub struct ToolScanner {
    directives: DirectiveParser,
    annotation_prefix: String,
    capability_type: String,
    type_table: TypeTable,
}

impl ToolScanner {
    /// Creates a scanner using the prefixes and capability type from
    /// `config` and the built-in type table.
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            directives: DirectiveParser::new(config.marker_prefix.clone()),
            annotation_prefix: config.annotation_prefix.clone(),
            capability_type: config.capability_type.clone(),
            type_table: TypeTable::default(),
        }
    }

    /// Replaces the type table.
    #[must_use]
    pub fn with_type_table(mut self, type_table: TypeTable) -> Self {
        self.type_table = type_table;
        self
    }

    /// Walks `roots` and runs the discovery pass.
    ///
    /// Each root may be a directory, scanned recursively in file-name
    /// order, or a single file. Files without an `.rs` extension are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WalkDir`] if a directory cannot be listed,
    /// [`Error::Io`] if a file cannot be read and [`Error::Parse`] if a file
    /// is not valid Rust.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> Result<Scan> {
        let mut scan = Scan::default();

        for root in roots {
            let root = root.as_ref();
            tracing::debug!(root = %root.display(), "scanning");

            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = entry.map_err(|source| Error::WalkDir { source })?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.path();
                if path.extension().is_none_or(|ext| ext != "rs") {
                    tracing::debug!(file = %path.display(), "skipping non-source file");
                    continue;
                }

                self.scan_file(path, &mut scan)?;
            }
        }

        tracing::debug!(
            files = scan.files_scanned,
            tools = scan.registry.len(),
            declarations = scan.index.len(),
            "discovery finished"
        );
        Ok(scan)
    }

    /// Parses a single file into `scan`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Parse`].
    pub fn scan_file(&self, path: &Path, scan: &mut Scan) -> Result<()> {
        tracing::debug!(file = %path.display(), "walking");

        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let declarations = source::parse_declarations(path, &text)?;
        scan.files_scanned += 1;

        for decl in declarations {
            match self.discover(&decl) {
                Some(Ok(tool)) => {
                    tracing::debug!(
                        tool = %tool.type_name,
                        schema_name = %tool.schema_name,
                        arguments = %tool.arguments_type_name,
                        "found tool"
                    );
                    scan.registry.add(tool);
                }
                Some(Err(err)) => {
                    tracing::error!(
                        file = %decl.path.display(),
                        line = decl.line,
                        "{err}"
                    );
                }
                None => {}
            }
            scan.index.insert(decl);
        }

        Ok(())
    }

    /// Evaluates one declaration.
    ///
    /// Returns `None` if it carries no marker directive.
    #[must_use]
    pub fn discover(&self, decl: &Declaration) -> Option<std::result::Result<Tool, DiscoveryError>> {
        let directives = self.directives.parse(decl)?;
        Some(self.discover_marked(decl, &directives))
    }

    fn discover_marked(
        &self,
        decl: &Declaration,
        directives: &Directives,
    ) -> std::result::Result<Tool, DiscoveryError> {
        let Some((style, fields)) = decl.as_struct() else {
            return Err(DiscoveryError::NotAStruct {
                type_name: decl.name.clone(),
                kind: decl.kind.keyword(),
            });
        };

        let (shape, arguments_type_name) = match fields.first() {
            None => (ToolShape::fieldless(style), String::new()),
            Some(first) => {
                let args = self.capability_argument(&first.ty).ok_or_else(|| {
                    DiscoveryError::MissingCapability {
                        type_name: decl.name.clone(),
                        capability: self.capability_type.clone(),
                        found: first.ty.to_string(),
                    }
                })?;
                let shape = ToolShape {
                    style,
                    capability_field: Some(first.ident.clone()),
                    has_extra_fields: fields.len() > 1,
                };
                (shape, args.to_string())
            }
        };

        let mut tool = Tool::new(&decl.path, &decl.name, shape);
        tool.schema_name = directives.name().to_string();
        tool.description = directives.description().to_string();
        tool.module_path.clone_from(&decl.module_path);
        if !arguments_type_name.is_empty() {
            tool.arguments_type_name = arguments_type_name;
            tool.resolution = ArgumentResolution::Pending;
        }
        Ok(tool)
    }

    /// Matches `<capability><Args>` and returns `Args`.
    fn capability_argument<'a>(&self, ty: &'a TypeRef) -> Option<&'a str> {
        match ty {
            TypeRef::Path { name, args } if *name == self.capability_type => match args.as_slice() {
                [single] => single.plain_path(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Runs the argument-extraction pass over every tool in `scan`.
    ///
    /// Tools whose arguments type is not in the index end up
    /// [`ArgumentResolution::Missing`]; extraction problems end up
    /// [`ArgumentResolution::Failed`]. Either way the tool keeps an empty
    /// argument set.
    pub fn resolve_arguments(&self, scan: &mut Scan) {
        let Scan {
            registry, index, ..
        } = scan;

        for tool in registry.iter_mut() {
            if !tool.needs_arguments() {
                tool.resolution = ArgumentResolution::NotRequired;
                continue;
            }

            let Some(decl) = index.get(&tool.arguments_type_name) else {
                tracing::debug!(
                    tool = %tool.type_name,
                    arguments = %tool.arguments_type_name,
                    "arguments type not found, generating without parameters"
                );
                tool.clear_arguments();
                tool.resolution = ArgumentResolution::Missing;
                continue;
            };

            match self.extract_arguments(decl) {
                Ok(arguments) => {
                    tool.set_arguments(arguments);
                    tool.resolution = ArgumentResolution::Resolved;
                }
                Err(err) => {
                    tracing::error!(tool = %tool.type_name, "error finding tool arguments: {err}");
                    tool.clear_arguments();
                    tool.resolution = ArgumentResolution::Failed(err);
                }
            }
        }
    }

    /// Extracts the parameters described by an arguments struct.
    ///
    /// Each parameter is exposed under the key serde decodes its field
    /// from, so the schema and the decoder always agree. An annotation
    /// `name` must repeat that key, and an optional parameter needs a
    /// serde default on the field or the struct.
    ///
    /// # Errors
    ///
    /// Returns the first [`ExtractionError`] found; no partial result is
    /// produced.
    pub fn extract_arguments(
        &self,
        decl: &Declaration,
    ) -> std::result::Result<Vec<Argument>, ExtractionError> {
        let Some((style, fields)) = decl.as_struct() else {
            return Err(ExtractionError::NotAStruct {
                type_name: decl.name.clone(),
            });
        };
        if style == StructStyle::Tuple && !fields.is_empty() {
            return Err(ExtractionError::UnnamedFields {
                type_name: decl.name.clone(),
            });
        }

        let mut exposed = BTreeSet::new();
        let mut arguments = Vec::with_capacity(fields.len());

        for field in fields {
            let argument = self.extract_argument(decl, field)?;
            tracing::debug!(
                field = %argument.field_identifier,
                name = %argument.exposed_name,
                schema_type = %argument.schema_type,
                required = argument.required,
                "found argument"
            );
            if !exposed.insert(argument.exposed_name.clone()) {
                return Err(ExtractionError::DuplicateExposedName {
                    type_name: decl.name.clone(),
                    name: argument.exposed_name,
                });
            }
            arguments.push(argument);
        }

        Ok(arguments)
    }

    fn extract_argument(
        &self,
        decl: &Declaration,
        field: &FieldDecl,
    ) -> std::result::Result<Argument, ExtractionError> {
        let type_name = decl.name.as_str();
        let raw = self
            .annotation_text(field)
            .ok_or_else(|| ExtractionError::MissingAnnotation {
                type_name: type_name.to_string(),
                field: field.ident.clone(),
            })?;

        let annotation =
            Annotation::parse(&raw).map_err(|source| ExtractionError::MalformedAnnotation {
                type_name: type_name.to_string(),
                field: field.ident.clone(),
                source,
            })?;

        let schema_type = self.type_table.lookup(field.ty.name()).ok_or_else(|| {
            ExtractionError::UnsupportedType {
                type_name: type_name.to_string(),
                field: field.ident.clone(),
                rust_type: field.ty.to_string(),
            }
        })?;

        let exposed_name = field.wire_name(&decl.serde);
        if let Some(annotated) = annotation.name().filter(|name| !name.is_empty())
            && annotated != exposed_name
        {
            return Err(ExtractionError::NameMismatch {
                type_name: type_name.to_string(),
                field: field.ident.clone(),
                annotated: annotated.to_string(),
                decoded: exposed_name,
            });
        }

        let required = !annotation.is_optional();
        if !required && !field.serde.default && !decl.serde.default {
            return Err(ExtractionError::OptionalWithoutDefault {
                type_name: type_name.to_string(),
                field: field.ident.clone(),
            });
        }

        Ok(Argument {
            field_identifier: field.ident.clone(),
            exposed_name,
            description: annotation.description().unwrap_or_default().to_string(),
            required,
            schema_type,
        })
    }

    /// Joins the field's annotation lines, or `None` if it has none.
    fn annotation_text(&self, field: &FieldDecl) -> Option<String> {
        let parts: Vec<&str> = field
            .docs
            .iter()
            .filter_map(|line| line.strip_prefix(self.annotation_prefix.as_str()))
            .map(str::trim)
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Returns the output path for a source file: `weather.rs` with suffix
/// `_gen.rs` becomes `weather_gen.rs` in the same directory.
#[must_use]
pub fn output_path(source_path: &Path, suffix: &str) -> PathBuf {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source_path.with_file_name(format!("{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolkit::SchemaType;

    fn scanner() -> ToolScanner {
        ToolScanner::new(&GeneratorConfig::default())
    }

    fn decls(source: &str) -> Vec<Declaration> {
        source::parse_declarations(Path::new("tools/weather.rs"), source).unwrap()
    }

    fn single(source: &str) -> Declaration {
        decls(source).remove(0)
    }

    // ========================================================================
    // Discovery
    // ========================================================================

    #[test]
    fn test_unmarked_declaration_is_ignored() {
        let decl = single("/// A plain struct.\nstruct Plain { x: i32 }");
        assert!(scanner().discover(&decl).is_none());
    }

    #[test]
    fn test_discover_tool_with_capability() {
        let decl = single(
            r"
            /// +tool:name=weather_tool
            /// +tool:description=reports weather
            pub struct WeatherTool {
                args: toolkit::ToolArgs<WeatherArgs>,
            }
            ",
        );
        let tool = scanner().discover(&decl).unwrap().unwrap();
        assert_eq!(tool.type_name, "WeatherTool");
        assert_eq!(tool.schema_name, "weather_tool");
        assert_eq!(tool.description, "reports weather");
        assert_eq!(tool.arguments_type_name, "WeatherArgs");
        assert_eq!(tool.module_path, vec!["weather"]);
        assert_eq!(tool.shape.capability_field.as_deref(), Some("args"));
        assert!(!tool.shape.has_extra_fields);
        assert_eq!(tool.resolution, ArgumentResolution::Pending);
    }

    #[test]
    fn test_discover_fieldless_tool() {
        for source in [
            "/// +tool:name=a\nstruct A;",
            "/// +tool:name=a\nstruct A {}",
            "/// +tool:name=a\nstruct A();",
        ] {
            let tool = scanner().discover(&single(source)).unwrap().unwrap();
            assert!(!tool.needs_arguments(), "{source}");
            assert_eq!(tool.resolution, ArgumentResolution::NotRequired);
            assert!(tool.shape.capability_field.is_none());
        }
    }

    #[test]
    fn test_discover_rejects_non_struct() {
        let err = scanner()
            .discover(&single("/// +tool:name=e\nenum E { A }"))
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::NotAStruct { kind: "enum", .. }));
    }

    #[test]
    fn test_discover_rejects_wrong_first_field() {
        for first in [
            "String",
            "ToolArgs",
            "ToolArgs<A, B>",
            "ToolArgs<Vec<A>>",
            "Other<A>",
            "&'static ToolArgs<A>",
        ] {
            let source = format!("/// +tool:name=t\nstruct T {{ args: {first} }}");
            let result = scanner().discover(&single(&source)).unwrap();
            assert!(
                matches!(result, Err(DiscoveryError::MissingCapability { .. })),
                "{first}"
            );
        }
    }

    #[test]
    fn test_discover_tuple_and_extra_fields() {
        let tool = scanner()
            .discover(&single(
                "/// +tool:name=t\nstruct T(ToolArgs<Args>, String);",
            ))
            .unwrap()
            .unwrap();
        assert_eq!(tool.shape.capability_field.as_deref(), Some("0"));
        assert!(tool.shape.has_extra_fields);
    }

    #[test]
    fn test_custom_capability_type() {
        let config = GeneratorConfig::builder().capability_type("Params").build();
        let scanner = ToolScanner::new(&config);
        let decl = single("/// +tool:name=t\nstruct T { p: Params<Args> }");
        let tool = scanner.discover(&decl).unwrap().unwrap();
        assert_eq!(tool.arguments_type_name, "Args");
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    #[test]
    fn test_extract_arguments() {
        let decl = single(
            r#"
            struct GeocodeArgs {
                /// +arg: desc:"The address to geocode"
                address: String,
                /// +arg: name:"max" desc:"Result limit"
                /// +arg: optional:"true"
                #[serde(rename = "max", default)]
                limit: i64,
            }
            "#,
        );
        let args = scanner().extract_arguments(&decl).unwrap();
        assert_eq!(
            args,
            vec![
                Argument {
                    field_identifier: "address".to_string(),
                    exposed_name: "address".to_string(),
                    description: "The address to geocode".to_string(),
                    required: true,
                    schema_type: SchemaType::String,
                },
                Argument {
                    field_identifier: "limit".to_string(),
                    exposed_name: "max".to_string(),
                    description: "Result limit".to_string(),
                    required: false,
                    schema_type: SchemaType::Integer,
                },
            ]
        );
    }

    #[test]
    fn test_empty_annotation_uses_field_name() {
        let decl = single("struct A {\n/// +arg:\nr#type: bool }");
        let args = scanner().extract_arguments(&decl).unwrap();
        assert_eq!(args[0].exposed_name, "type");
        assert_eq!(args[0].field_identifier, "r#type");
    }

    #[test]
    fn test_extract_missing_annotation() {
        let decl = single("struct A {\n/// Just prose.\nlocation: String }");
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingAnnotation { ref field, .. } if field == "location"));
    }

    #[test]
    fn test_extract_malformed_annotation() {
        let decl = single("struct A {\n/// +arg: desc:\"oops\nlocation: String }");
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedAnnotation { .. }));
    }

    #[test]
    fn test_extract_unsupported_type() {
        let decl = single("struct A {\n/// +arg:\nwhen: std::time::SystemTime }");
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UnsupportedType {
                type_name: "A".to_string(),
                field: "when".to_string(),
                rust_type: "SystemTime".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_duplicate_exposed_name() {
        let decl = single(
            r#"
            struct A {
                /// +arg:
                #[serde(rename = "x")]
                a: String,
                /// +arg:
                #[serde(alias = "b", rename = "x")]
                b: String,
            }
            "#,
        );
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert!(matches!(err, ExtractionError::DuplicateExposedName { ref name, .. } if name == "x"));
    }

    #[test]
    fn test_exposed_name_follows_serde() {
        let decl = single(
            r#"
            #[serde(rename_all = "camelCase")]
            struct SearchArgs {
                /// +arg: desc:"Query text"
                query_text: String,
                /// +arg: name:"max"
                #[serde(rename = "max")]
                result_limit: i64,
            }
            "#,
        );
        let args = scanner().extract_arguments(&decl).unwrap();
        assert_eq!(args[0].exposed_name, "queryText");
        assert_eq!(args[0].field_identifier, "query_text");
        assert_eq!(args[1].exposed_name, "max");
    }

    #[test]
    fn test_annotated_name_must_match_decoded_name() {
        let decl = single(
            r#"
            struct SearchArgs {
                /// +arg: name:"max" desc:"Result limit"
                limit: i64,
            }
            "#,
        );
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::NameMismatch {
                type_name: "SearchArgs".to_string(),
                field: "limit".to_string(),
                annotated: "max".to_string(),
                decoded: "limit".to_string(),
            }
        );

        let decl = single(
            r#"
            #[serde(rename_all = "camelCase")]
            struct SearchArgs {
                /// +arg: name:"result_limit"
                result_limit: i64,
            }
            "#,
        );
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert!(
            matches!(err, ExtractionError::NameMismatch { ref decoded, .. } if decoded == "resultLimit")
        );
    }

    #[test]
    fn test_optional_requires_serde_default() {
        let decl = single(
            r#"
            struct SearchArgs {
                /// +arg: desc:"Result limit" optional:"true"
                limit: i64,
            }
            "#,
        );
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::OptionalWithoutDefault {
                type_name: "SearchArgs".to_string(),
                field: "limit".to_string(),
            }
        );

        let decl = single(
            r#"
            #[derive(Deserialize, Default)]
            #[serde(default)]
            struct SearchArgs {
                /// +arg: optional:"true"
                limit: i64,
                /// +arg: optional:"true"
                #[serde(default = "default_order")]
                order: String,
            }
            "#,
        );
        let args = scanner().extract_arguments(&decl).unwrap();
        assert!(args.iter().all(|arg| !arg.required));
    }

    #[test]
    fn test_extract_from_tuple_struct_fails() {
        let decl = single("struct A(\n/// +arg:\nString);");
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UnnamedFields {
                type_name: "A".to_string(),
            }
        );

        let decl = single("struct Empty();");
        assert!(scanner().extract_arguments(&decl).unwrap().is_empty());
    }

    #[test]
    fn test_extract_from_enum_fails() {
        let decl = single("enum A { X }");
        let err = scanner().extract_arguments(&decl).unwrap_err();
        assert!(matches!(err, ExtractionError::NotAStruct { .. }));
    }

    #[test]
    fn test_custom_type_table() {
        let scanner =
            scanner().with_type_table(TypeTable::builtin().with_mapping("u8", SchemaType::Integer));
        let decl = single("struct A {\n/// +arg:\nlevel: u8 }");
        assert_eq!(
            scanner.extract_arguments(&decl).unwrap()[0].schema_type,
            SchemaType::Integer
        );
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    fn scan_of(source: &str) -> Scan {
        let scanner = scanner();
        let mut scan = Scan::default();
        for decl in decls(source) {
            if let Some(Ok(tool)) = scanner.discover(&decl) {
                scan.registry.add(tool);
            }
            scan.index.insert(decl);
        }
        scanner.resolve_arguments(&mut scan);
        scan
    }

    #[test]
    fn test_resolution_outcomes_are_distinct() {
        let scan = scan_of(
            r#"
            /// +tool:name=ok
            struct Resolved { args: ToolArgs<GoodArgs> }
            /// +tool:name=missing
            struct Missing { args: ToolArgs<NowhereArgs> }
            /// +tool:name=failed
            struct Failed { args: ToolArgs<BadArgs> }
            /// +tool:name=none
            struct Fieldless;

            struct GoodArgs {
                /// +arg: desc:"fine"
                value: f64,
            }
            struct BadArgs {
                value: f64,
            }
            "#,
        );

        let resolution = |name: &str| scan.registry.get(name).unwrap().resolution.clone();
        assert_eq!(resolution("Resolved"), ArgumentResolution::Resolved);
        assert_eq!(resolution("Missing"), ArgumentResolution::Missing);
        assert!(resolution("Failed").is_failed());
        assert_eq!(resolution("Fieldless"), ArgumentResolution::NotRequired);

        assert_eq!(scan.registry.get("Resolved").unwrap().argument_count(), 1);
        assert_eq!(scan.registry.get("Missing").unwrap().argument_count(), 0);
        assert_eq!(scan.registry.get("Failed").unwrap().argument_count(), 0);
    }

    #[test]
    fn test_index_first_declaration_wins() {
        let mut index = TypeIndex::new();
        let mut all = decls("struct A { x: i32 }");
        all.extend(decls("enum A { X }"));
        for decl in all {
            index.insert(decl);
        }
        assert_eq!(index.len(), 1);
        assert!(index.get("A").unwrap().as_struct().is_some());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("src/tools/weather.rs"), "_gen.rs"),
            PathBuf::from("src/tools/weather_gen.rs")
        );
        assert_eq!(
            output_path(Path::new("weather.rs"), "_tool.rs"),
            PathBuf::from("weather_tool.rs")
        );
    }
}
