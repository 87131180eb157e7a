//! Field annotation micro-format.
//!
//! Each field of an arguments struct carries an annotation on a doc line
//! starting with `+arg:`. The annotation is a run of `key:"value"` pairs:
//!
//! ```text
//! /// +arg: name:"location" desc:"City to report on" optional:"true"
//! ```
//!
//! Values may contain spaces and `\"` escapes. A quote outside a pair is
//! malformed input and rejected.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Annotation key overriding the exposed parameter name.
pub const NAME_KEY: &str = "name";

/// Annotation key carrying the parameter description.
pub const DESCRIPTION_KEY: &str = "desc";

/// Annotation key marking the parameter optional.
pub const OPTIONAL_KEY: &str = "optional";

/// The only value of [`OPTIONAL_KEY`] that makes a parameter optional.
pub const TRUE_TOKEN: &str = "true";

static PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+):"((?:[^"\\]|\\.)*)""#).expect("valid regex"));

/// Errors raised while parsing an annotation string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// A quote appears outside any complete `key:"value"` pair.
    #[error("unbalanced quote at offset {offset} in `{annotation}`")]
    UnbalancedQuote {
        /// The annotation text as written
        annotation: String,
        /// Byte offset of the stray quote
        offset: usize,
    },
}

/// Parsed `key:"value"` pairs of one field annotation.
///
/// # Examples
///
/// ```
/// use toolkit_codegen::annotation::Annotation;
///
/// let annotation = Annotation::parse(r#"name:"lat" desc:"The latitude of the location.""#)?;
/// assert_eq!(annotation.name(), Some("lat"));
/// assert_eq!(annotation.description(), Some("The latitude of the location."));
/// assert!(!annotation.is_optional());
/// # Ok::<(), toolkit_codegen::annotation::AnnotationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    entries: HashMap<String, String>,
}

impl Annotation {
    /// Parses an annotation string.
    ///
    /// Text between pairs is ignored unless it contains a quote. When a key
    /// repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::UnbalancedQuote`] if a quote is left over
    /// outside the recognized pairs.
    pub fn parse(raw: &str) -> Result<Self, AnnotationError> {
        let mut entries = HashMap::new();
        let mut cursor = 0;

        for caps in PAIR_REGEX.captures_iter(raw) {
            let (Some(whole), Some(key), Some(value)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            reject_stray_quote(raw, cursor, whole.start())?;
            cursor = whole.end();
            entries.insert(key.as_str().to_string(), unescape(value.as_str()));
        }
        reject_stray_quote(raw, cursor, raw.len())?;

        Ok(Self { entries })
    }

    /// Returns the value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the name override.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY)
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION_KEY)
    }

    /// Returns `true` only when the optional key is literally `"true"`.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.get(OPTIONAL_KEY) == Some(TRUE_TOKEN)
    }

    /// Returns the number of parsed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pairs were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn reject_stray_quote(raw: &str, start: usize, end: usize) -> Result<(), AnnotationError> {
    match raw[start..end].find('"') {
        Some(pos) => Err(AnnotationError::UnbalancedQuote {
            annotation: raw.to_string(),
            offset: start + pos,
        }),
        None => Ok(()),
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next @ ('"' | '\\')) => out.push(next),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
