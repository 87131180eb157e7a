//! Owned description of the type declarations found in a source file.
//!
//! The scanner reads each file once with `syn` and lowers every struct,
//! enum, union and type alias into a [`Declaration`]. Everything downstream
//! (directive parsing, discovery, argument extraction) works on these
//! values and never sees a syntax tree.
//!
//! The `#[serde(...)]` options that change how an arguments struct decodes
//! (`rename`, `rename_all`, `default`) are kept as [`SerdeAttrs`] so the
//! exposed parameter names can follow the decoder.

use crate::error::{Error, Result};
use quote::ToTokens;
use std::fmt;
use std::path::{Path, PathBuf};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{
    Attribute, Expr, ExprLit, Fields, GenericArgument, Item, Lit, LitStr, Meta, PathArguments,
    Token, Type,
};

/// File stems that name their directory's module rather than a child.
const DIRECTORY_MODULE_STEMS: [&str; 3] = ["mod", "lib", "main"];

/// A type declaration lifted out of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared type name
    pub name: String,
    /// Doc comment lines, trimmed
    pub docs: Vec<String>,
    /// What kind of type this is
    pub kind: DeclKind,
    /// File the declaration was read from
    pub path: PathBuf,
    /// Module segments relative to the file's directory
    pub module_path: Vec<String>,
    /// 1-based line of the type name
    pub line: usize,
    /// Container-level serde options
    pub serde: SerdeAttrs,
}

impl Declaration {
    /// Returns the struct style and fields, or `None` for other kinds.
    #[must_use]
    pub fn as_struct(&self) -> Option<(StructStyle, &[FieldDecl])> {
        match &self.kind {
            DeclKind::Struct { style, fields } => Some((*style, fields.as_slice())),
            _ => None,
        }
    }
}

/// Kind of a [`Declaration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// `struct`
    Struct {
        /// Braced, tuple or unit
        style: StructStyle,
        /// Fields in declaration order
        fields: Vec<FieldDecl>,
    },
    /// `enum`
    Enum,
    /// `union`
    Union,
    /// `type` alias
    Alias,
}

impl DeclKind {
    /// Returns the keyword introducing this kind of declaration.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Struct { .. } => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Alias => "type",
        }
    }
}

/// How a struct lays out its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructStyle {
    /// `struct S { a: T }`
    Named,
    /// `struct S(T);`
    Tuple,
    /// `struct S;`
    Unit,
}

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name as written, or its position for tuple structs
    pub ident: String,
    /// Field type
    pub ty: TypeRef,
    /// Doc comment lines, trimmed
    pub docs: Vec<String>,
    /// Field-level serde options
    pub serde: SerdeAttrs,
}

impl FieldDecl {
    /// Returns the identifier without a raw-identifier prefix.
    #[must_use]
    pub fn plain_name(&self) -> &str {
        self.ident.strip_prefix("r#").unwrap_or(&self.ident)
    }

    /// Returns the key serde decodes this field from: its own `rename`,
    /// else the container's `rename_all` rule applied to the identifier,
    /// else the identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use toolkit_codegen::source::parse_declarations;
    ///
    /// let decls = parse_declarations(
    ///     Path::new("args.rs"),
    ///     r#"
    ///     #[serde(rename_all = "camelCase")]
    ///     struct Args {
    ///         max_results: i64,
    ///         #[serde(rename = "q")]
    ///         query: String,
    ///     }
    ///     "#,
    /// )?;
    /// let (_, fields) = decls[0].as_struct().unwrap();
    /// assert_eq!(fields[0].wire_name(&decls[0].serde), "maxResults");
    /// assert_eq!(fields[1].wire_name(&decls[0].serde), "q");
    /// # Ok::<(), toolkit_codegen::Error>(())
    /// ```
    #[must_use]
    pub fn wire_name(&self, container: &SerdeAttrs) -> String {
        if let Some(rename) = &self.serde.rename {
            return rename.clone();
        }
        container
            .rename_all
            .as_deref()
            .and_then(|rule| apply_rename_rule(rule, self.plain_name()))
            .unwrap_or_else(|| self.plain_name().to_string())
    }
}

/// Deserialization-relevant `#[serde(...)]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerdeAttrs {
    /// `rename = "..."` or `rename(deserialize = "...")`
    pub rename: Option<String>,
    /// `rename_all = "..."` or `rename_all(deserialize = "...")`
    pub rename_all: Option<String>,
    /// `default` or `default = "path"`
    pub default: bool,
}

impl SerdeAttrs {
    fn from_attrs(attrs: &[Attribute]) -> Self {
        let mut serde = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Some(name) = deserialize_value(&meta)? {
                        serde.rename = Some(name);
                    }
                } else if meta.path.is_ident("rename_all") {
                    if let Some(rule) = deserialize_value(&meta)? {
                        serde.rename_all = Some(rule);
                    }
                } else {
                    if meta.path.is_ident("default") {
                        serde.default = true;
                    }
                    skip_value(&meta)?;
                }
                Ok(())
            });
            if let Err(err) = parsed {
                tracing::debug!("ignoring unreadable serde attribute: {err}");
            }
        }
        serde
    }
}

/// Reads `key = "v"` or the `deserialize` half of `key(serialize = "..", deserialize = "..")`.
fn deserialize_value(meta: &ParseNestedMeta<'_>) -> syn::Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        let value: LitStr = meta.value()?.parse()?;
        return Ok(Some(value.value()));
    }

    let mut found = None;
    meta.parse_nested_meta(|inner| {
        let value: LitStr = inner.value()?.parse()?;
        if inner.path.is_ident("deserialize") {
            found = Some(value.value());
        }
        Ok(())
    })?;
    Ok(found)
}

/// Consumes whatever follows a serde key we do not interpret.
fn skip_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Applies a serde `rename_all` rule to a `snake_case` field name.
///
/// Returns `None` for rules serde does not define.
fn apply_rename_rule(rule: &str, field: &str) -> Option<String> {
    let capitalize = |word: &str| {
        let mut chars = word.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    };

    let renamed = match rule {
        "lowercase" | "snake_case" => field.to_string(),
        "UPPERCASE" | "SCREAMING_SNAKE_CASE" => field.to_ascii_uppercase(),
        "PascalCase" => field.split('_').map(capitalize).collect(),
        "camelCase" => {
            let pascal: String = field.split('_').map(capitalize).collect();
            let mut chars = pascal.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_lowercase().chain(chars).collect()
            })
        }
        "kebab-case" => field.replace('_', "-"),
        "SCREAMING-KEBAB-CASE" => field.to_ascii_uppercase().replace('_', "-"),
        _ => return None,
    };
    Some(renamed)
}

/// Simplified field type.
///
/// Paths keep only their last segment and its generic type arguments;
/// every other type form is kept as token text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A path type such as `String` or `toolkit::ToolArgs<WeatherArgs>`
    Path {
        /// Last path segment
        name: String,
        /// Generic type arguments of the last segment
        args: Vec<TypeRef>,
    },
    /// Any non-path type (reference, tuple, array, ...)
    Other(String),
}

impl TypeRef {
    /// Returns the name used for schema lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Path { name, .. } => name,
            Self::Other(text) => text,
        }
    }

    /// Returns the name if this is a path without generic arguments.
    #[must_use]
    pub fn plain_path(&self) -> Option<&str> {
        match self {
            Self::Path { name, args } if args.is_empty() => Some(name),
            _ => None,
        }
    }

    fn from_syn(ty: &Type) -> Self {
        match ty {
            Type::Path(type_path) if type_path.qself.is_none() => {
                let Some(segment) = type_path.path.segments.last() else {
                    return Self::Other(ty.to_token_stream().to_string());
                };
                let args = match &segment.arguments {
                    PathArguments::AngleBracketed(generics) => generics
                        .args
                        .iter()
                        .filter_map(|arg| match arg {
                            GenericArgument::Type(inner) => Some(Self::from_syn(inner)),
                            _ => None,
                        })
                        .collect(),
                    _ => Vec::new(),
                };
                Self::Path {
                    name: segment.ident.to_string(),
                    args,
                }
            }
            Type::Group(group) => Self::from_syn(&group.elem),
            Type::Paren(paren) => Self::from_syn(&paren.elem),
            other => Self::Other(other.to_token_stream().to_string()),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path { name, args } if args.is_empty() => f.write_str(name),
            Self::Path { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            Self::Other(text) => f.write_str(text),
        }
    }
}

/// Parses `source` and returns every type declaration in it.
///
/// Declarations inside inline `mod` blocks are included, with the module
/// names appended to their module path.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `source` is not valid Rust.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use toolkit_codegen::source::parse_declarations;
///
/// let decls = parse_declarations(
///     Path::new("tools/weather.rs"),
///     "/// +tool:name=weather\npub struct WeatherTool;",
/// )?;
/// assert_eq!(decls[0].name, "WeatherTool");
/// assert_eq!(decls[0].docs, vec!["+tool:name=weather"]);
/// assert_eq!(decls[0].module_path, vec!["weather"]);
/// # Ok::<(), toolkit_codegen::Error>(())
/// ```
pub fn parse_declarations(path: &Path, source: &str) -> Result<Vec<Declaration>> {
    let file = syn::parse_file(source).map_err(|e| Error::parse(path.to_path_buf(), e))?;

    let mut decls = Vec::new();
    collect_items(path, &file_module_path(path), &file.items, &mut decls);
    Ok(decls)
}

/// Module segments contributed by a file name.
fn file_module_path(path: &Path) -> Vec<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !DIRECTORY_MODULE_STEMS.contains(stem))
        .map(|stem| vec![stem.to_string()])
        .unwrap_or_default()
}

fn collect_items(path: &Path, module_path: &[String], items: &[Item], out: &mut Vec<Declaration>) {
    for item in items {
        let (ident, attrs, kind) = match item {
            Item::Struct(item) => (&item.ident, &item.attrs, lower_struct(&item.fields)),
            Item::Enum(item) => (&item.ident, &item.attrs, DeclKind::Enum),
            Item::Union(item) => (&item.ident, &item.attrs, DeclKind::Union),
            Item::Type(item) => (&item.ident, &item.attrs, DeclKind::Alias),
            Item::Mod(item) => {
                if let Some((_, nested)) = &item.content {
                    let mut nested_path = module_path.to_vec();
                    nested_path.push(item.ident.unraw().to_string());
                    collect_items(path, &nested_path, nested, out);
                }
                continue;
            }
            _ => continue,
        };

        out.push(Declaration {
            name: ident.unraw().to_string(),
            docs: doc_lines(attrs),
            kind,
            path: path.to_path_buf(),
            module_path: module_path.to_vec(),
            line: ident.span().start().line,
            serde: SerdeAttrs::from_attrs(attrs),
        });
    }
}

fn lower_struct(fields: &Fields) -> DeclKind {
    let style = match fields {
        Fields::Named(_) => StructStyle::Named,
        Fields::Unnamed(_) => StructStyle::Tuple,
        Fields::Unit => StructStyle::Unit,
    };

    let fields = fields
        .iter()
        .enumerate()
        .map(|(index, field)| FieldDecl {
            ident: field
                .ident
                .as_ref()
                .map_or_else(|| index.to_string(), ToString::to_string),
            ty: TypeRef::from_syn(&field.ty),
            docs: doc_lines(&field.attrs),
            serde: SerdeAttrs::from_attrs(&field.attrs),
        })
        .collect();

    DeclKind::Struct { style, fields }
}

/// Collects `///`, `/** */` and `#[doc = "..."]` text, one entry per line.
fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value()),
                _ => None,
            },
            _ => None,
        })
        .flat_map(|text| {
            text.lines()
                .map(|line| {
                    let line = line.trim();
                    line.strip_prefix('*').map_or(line, str::trim_start).to_string()
                })
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}
