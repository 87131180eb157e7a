//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the module template and the
//! per-tool partial it includes pre-registered. Output is Rust source, so
//! HTML escaping is disabled;
//! string values that end up inside literals go through the `rust_str`
//! helper instead.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use toolkit_codegen::template_engine::TemplateEngine;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine
//!     .register_template_string("greeting", "let s = {{rust_str text}};")
//!     .unwrap();
//!
//! let out = engine.render("greeting", &json!({"text": "say \"hi\""})).unwrap();
//! assert_eq!(out, r#"let s = "say \"hi\"";"#);
//! ```

use crate::error::{Error, Result};
use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

/// Name of the module template: header, imports, then each tool.
pub const MODULE_TEMPLATE: &str = "module";

/// Name of the per-tool template, included by the module template as
/// `{{> tool}}`.
pub const TOOL_TEMPLATE: &str = "tool";

handlebars_helper!(rust_str: |value: str| format!("{value:?}"));

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode: a template referring to a missing
/// context field fails instead of rendering an empty string.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if a built-in template fails to
    /// register.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("rust_str", Box::new(rust_str));

        let mut engine = Self { handlebars };
        engine.register_template_string(
            MODULE_TEMPLATE,
            include_str!("../templates/module.rs.hbs"),
        )?;
        engine.register_template_string(TOOL_TEMPLATE, include_str!("../templates/tool.rs.hbs"))?;

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A referenced field is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("rendering `{template_name}` failed: {e}"),
            })
    }

    /// Registers an additional template.
    ///
    /// Templates are also partials, so one registered under
    /// [`TOOL_TEMPLATE`] replaces what the module template renders per tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::Template {
                message: format!("failed to register template `{name}`: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
