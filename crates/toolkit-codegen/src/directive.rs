//! Marker directive parsing.
//!
//! A declaration opts into generation with doc lines of the form
//! `+tool:<key>=<value>`. This module only sees doc lines through
//! [`DirectiveSource`], so discovery rules can be exercised without a
//! syntax tree.

use crate::source::Declaration;
use std::collections::BTreeMap;

/// Directive key holding the schema name.
pub const NAME_KEY: &str = "name";

/// Directive key holding the tool description.
pub const DESCRIPTION_KEY: &str = "description";

/// Anything that can supply doc comment lines.
pub trait DirectiveSource {
    /// Returns the doc lines in source order.
    fn doc_lines(&self) -> Vec<&str>;
}

impl DirectiveSource for [String] {
    fn doc_lines(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl DirectiveSource for [&str] {
    fn doc_lines(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl DirectiveSource for Declaration {
    fn doc_lines(&self) -> Vec<&str> {
        self.docs.doc_lines()
    }
}

/// Key/value pairs decoded from a marked declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    entries: BTreeMap<String, String>,
}

impl Directives {
    /// Returns the value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the schema name, or an empty string when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.get(NAME_KEY).unwrap_or_default()
    }

    /// Returns the description, or an empty string when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.get(DESCRIPTION_KEY).unwrap_or_default()
    }

    /// Iterates over all pairs, including unrecognized keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Recognizes marker directives by prefix.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::directive::DirectiveParser;
///
/// let parser = DirectiveParser::new("+tool:");
/// let docs = ["+tool:name=weather_tool", "+tool:description=reports weather"];
///
/// let directives = parser.parse(&docs[..]).unwrap();
/// assert_eq!(directives.name(), "weather_tool");
/// assert_eq!(directives.description(), "reports weather");
///
/// assert!(parser.parse(&["just a comment"][..]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveParser {
    prefix: String,
}

impl DirectiveParser {
    /// Creates a parser for the given marker prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the marker prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if any doc line carries the marker prefix.
    pub fn has_marker<S: DirectiveSource + ?Sized>(&self, source: &S) -> bool {
        source
            .doc_lines()
            .iter()
            .any(|line| line.trim().starts_with(&self.prefix))
    }

    /// Decodes the directives of a marked source.
    ///
    /// Returns `None` if no line carries the marker. Lines are split on the
    /// first `=`; keys and values are trimmed and a repeated key keeps its
    /// last value. Marker lines without `=` still mark the source but add no
    /// pair.
    pub fn parse<S: DirectiveSource + ?Sized>(&self, source: &S) -> Option<Directives> {
        let mut marked = false;
        let mut entries = BTreeMap::new();

        for line in source.doc_lines() {
            let Some(rest) = line.trim().strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            marked = true;
            if let Some((key, value)) = rest.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        marked.then_some(Directives { entries })
    }
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MARKER_PREFIX)
    }
}
