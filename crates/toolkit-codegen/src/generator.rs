//! Tool module generator.
//!
//! Turns the resolved [`Tool`]s of one source file into a single Rust
//! module implementing the runtime toolkit's `Definable` and `Parsable`
//! traits plus a `new()` constructor for each, and writes it next to the
//! declaring file.
//!
//! # Examples
//!
//! ```
//! use toolkit::SchemaType;
//! use toolkit_codegen::source::StructStyle;
//! use toolkit_codegen::{Argument, GeneratorConfig, Tool, ToolGenerator, ToolShape};
//!
//! let shape = ToolShape {
//!     style: StructStyle::Named,
//!     capability_field: Some("args".to_string()),
//!     has_extra_fields: false,
//! };
//! let mut tool = Tool::new("src/tools/weather.rs", "WeatherTool", shape);
//! tool.schema_name = "weather_tool".to_string();
//! tool.arguments_type_name = "WeatherArgs".to_string();
//! tool.module_path = vec!["weather".to_string()];
//! tool.add_argument(Argument::new("location", SchemaType::String));
//!
//! let generator = ToolGenerator::new(&GeneratorConfig::default())?;
//! let file = generator.render(&tool)?;
//!
//! assert!(file.path.ends_with("weather_gen.rs"));
//! assert!(file.content.contains(r#".required(&["location", ])"#));
//! # Ok::<(), toolkit_codegen::Error>(())
//! ```

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::model::Tool;
use crate::scanner::output_path;
use crate::source::StructStyle;
use crate::template_engine::{MODULE_TEMPLATE, TOOL_TEMPLATE, TemplateEngine};
use crate::types::{GeneratedFile, ModuleContext, PropertyContext, ToolContext};
use std::collections::BTreeSet;
use std::path::Path;

/// Renders and writes tool modules.
#[derive(Debug)]
pub struct ToolGenerator {
    engine: TemplateEngine<'static>,
    runtime_path: String,
    suffix: String,
}

impl ToolGenerator {
    /// Creates a generator with the built-in template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template fails to register.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            runtime_path: config.runtime_path.clone(),
            suffix: config.suffix.clone(),
        })
    }

    /// Replaces the per-tool template.
    ///
    /// The module header and imports are still rendered around it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template does not compile.
    pub fn with_template(mut self, template: &str) -> Result<Self> {
        self.engine.register_template_string(TOOL_TEMPLATE, template)?;
        Ok(self)
    }

    /// Builds the template context for a tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSchemaName`] if the tool has no schema name.
    pub fn context(&self, tool: &Tool) -> Result<ToolContext> {
        if tool.schema_name.is_empty() {
            return Err(Error::MissingSchemaName {
                tool: tool.type_name.clone(),
            });
        }

        let import_path = std::iter::once("super")
            .chain(tool.module_path.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("::");

        let properties = tool
            .arguments()
            .map(|arg| PropertyContext {
                name: arg.exposed_name.clone(),
                schema_variant: arg.schema_type.variant_name().to_string(),
                description: arg.description.clone(),
            })
            .collect();

        let shape = &tool.shape;
        let empty_constructor = match shape.style {
            StructStyle::Named => "Self {}",
            StructStyle::Tuple => "Self()",
            StructStyle::Unit => "Self",
        };

        Ok(ToolContext {
            type_name: tool.type_name.clone(),
            runtime_path: self.runtime_path.clone(),
            import_path,
            schema_name: tool.schema_name.clone(),
            description: tool.description.clone(),
            properties,
            required: tool.required_names().into_iter().map(String::from).collect(),
            has_capability: shape.capability_field.is_some(),
            capability_field: shape.capability_field.clone().unwrap_or_default(),
            arguments_type: tool.arguments_type_name.clone(),
            brace_constructor: shape.style == StructStyle::Named || shape.has_extra_fields,
            has_extra_fields: shape.has_extra_fields,
            empty_constructor: empty_constructor.to_string(),
        })
    }

    /// Renders the module for one source file and checks that it parses.
    ///
    /// `tools` are the contexts of the tools declared in `source_path`;
    /// the module imports each distinct declaring module once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] or [`Error::InvalidOutput`].
    pub fn render_module(
        &self,
        source_path: &Path,
        tools: &[ToolContext],
    ) -> Result<GeneratedFile> {
        let path = output_path(source_path, &self.suffix);
        let imports: BTreeSet<&str> = tools.iter().map(|t| t.import_path.as_str()).collect();

        let context = ModuleContext {
            source_file: source_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            runtime_path: self.runtime_path.clone(),
            imports: imports.into_iter().map(String::from).collect(),
            tools: tools.to_vec(),
        };
        let content = self.engine.render(MODULE_TEMPLATE, &context)?;

        syn::parse_file(&content).map_err(|source| Error::InvalidOutput {
            path: path.clone(),
            source,
        })?;

        Ok(GeneratedFile {
            tools: tools.iter().map(|t| t.type_name.clone()).collect(),
            path,
            content,
        })
    }

    /// Renders a module holding a single tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSchemaName`], [`Error::Template`] or
    /// [`Error::InvalidOutput`].
    pub fn render(&self, tool: &Tool) -> Result<GeneratedFile> {
        let context = self.context(tool)?;
        self.render_module(&tool.source_path, &[context])
    }

    /// Writes a rendered file, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be written.
    pub fn write(file: &GeneratedFile) -> Result<()> {
        std::fs::write(&file.path, &file.content).map_err(|source| Error::Write {
            path: file.path.clone(),
            source,
        })?;
        tracing::debug!(path = %file.path.display(), bytes = file.content.len(), "wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Argument, ToolShape};
    use quote::ToTokens;
    use std::path::PathBuf;
    use toolkit::SchemaType;

    fn generator() -> ToolGenerator {
        ToolGenerator::new(&GeneratorConfig::default()).unwrap()
    }

    fn weather_tool() -> Tool {
        let shape = ToolShape {
            style: StructStyle::Named,
            capability_field: Some("args".to_string()),
            has_extra_fields: false,
        };
        let mut tool = Tool::new("src/tools/weather.rs", "WeatherTool", shape);
        tool.schema_name = "weather_tool".to_string();
        tool.description = "reports weather".to_string();
        tool.arguments_type_name = "WeatherArgs".to_string();
        tool.module_path = vec!["weather".to_string()];
        tool.add_argument(Argument::new("location", SchemaType::String));
        tool.add_argument(Argument {
            required: false,
            description: "Forecast length in days".to_string(),
            ..Argument::new("days", SchemaType::Integer)
        });
        tool
    }

    // ========================================================================
    // Context Tests
    // ========================================================================

    #[test]
    fn test_context() {
        let context = generator().context(&weather_tool()).unwrap();
        assert_eq!(context.import_path, "super::weather");
        assert_eq!(context.runtime_path, "::toolkit");
        assert_eq!(context.required, vec!["location"]);
        let names: Vec<_> = context.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["days", "location"]);
        assert_eq!(context.properties[0].schema_variant, "Integer");
        assert!(context.has_capability);
        assert!(context.brace_constructor);
    }

    #[test]
    fn test_context_requires_schema_name() {
        let mut tool = weather_tool();
        tool.schema_name.clear();
        let err = generator().context(&tool).unwrap_err();
        assert!(matches!(err, Error::MissingSchemaName { ref tool } if tool == "WeatherTool"));
    }

    #[test]
    fn test_context_for_directory_module() {
        let mut tool = weather_tool();
        tool.module_path.clear();
        assert_eq!(generator().context(&tool).unwrap().import_path, "super");

        tool.module_path = vec!["weather".to_string(), "inner".to_string()];
        assert_eq!(
            generator().context(&tool).unwrap().import_path,
            "super::weather::inner"
        );
    }

    // ========================================================================
    // Rendering Tests
    // ========================================================================

    #[test]
    fn test_render_weather_tool() {
        let file = generator().render(&weather_tool()).unwrap();
        assert_eq!(file.path, PathBuf::from("src/tools/weather_gen.rs"));
        assert_eq!(file.tools, vec!["WeatherTool"]);
        assert!(file.content.contains("// Source: weather.rs"));
        assert!(file.content.contains("use super::weather::*;"));
        assert!(file.content.contains("// Arguments: WeatherArgs"));
        assert!(file.content.contains(r#""Forecast length in days""#));
        assert!(file.content.contains(r#".required(&["location", ])"#));
    }

    #[test]
    fn test_render_module_with_several_tools() {
        let generator = generator();
        let mut forecast = weather_tool();
        forecast.type_name = "ForecastTool".to_string();
        forecast.schema_name = "forecast_tool".to_string();
        forecast.arguments_type_name = "ForecastArgs".to_string();

        let mut nested = weather_tool();
        nested.type_name = "AlertTool".to_string();
        nested.schema_name = "alert_tool".to_string();
        nested.module_path = vec!["weather".to_string(), "alerts".to_string()];

        let contexts: Vec<_> = [&nested, &forecast, &weather_tool()]
            .into_iter()
            .map(|tool| generator.context(tool).unwrap())
            .collect();
        let file = generator
            .render_module(Path::new("src/tools/weather.rs"), &contexts)
            .unwrap();

        assert_eq!(file.path, PathBuf::from("src/tools/weather_gen.rs"));
        assert_eq!(file.tools, vec!["AlertTool", "ForecastTool", "WeatherTool"]);
        assert_eq!(file.content.matches("DO NOT EDIT").count(), 1);
        assert_eq!(file.content.matches("use super::weather::*;").count(), 1);
        assert_eq!(file.content.matches("use super::weather::alerts::*;").count(), 1);

        let parsed = syn::parse_file(&file.content).unwrap();
        let implemented: Vec<String> = parsed
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Impl(item) if item.trait_.is_some() => {
                    Some(item.self_ty.to_token_stream().to_string())
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            implemented,
            vec![
                "AlertTool",
                "AlertTool",
                "ForecastTool",
                "ForecastTool",
                "WeatherTool",
                "WeatherTool",
            ]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = generator().render(&weather_tool()).unwrap();
        let b = generator().render(&weather_tool()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_all_constructor_shapes() {
        let shapes = [
            (StructStyle::Unit, None, false, "Self\n"),
            (StructStyle::Named, None, false, "Self {}"),
            (StructStyle::Tuple, None, false, "Self()"),
            (StructStyle::Tuple, Some("0"), false, "Self(::toolkit::ToolArgs::default())"),
            (StructStyle::Tuple, Some("0"), true, "0: ::toolkit::ToolArgs::default(),"),
            (StructStyle::Named, Some("args"), true, "..Default::default()"),
        ];

        for (style, field, extra, expected) in shapes {
            let shape = ToolShape {
                style,
                capability_field: field.map(String::from),
                has_extra_fields: extra,
            };
            let mut tool = Tool::new("t.rs", "T", shape);
            tool.schema_name = "t".to_string();
            let file = generator().render(&tool).unwrap();
            assert!(
                file.content.contains(expected),
                "{style:?}/{field:?}/{extra}: {}",
                file.content
            );
        }
    }

    #[test]
    fn test_custom_runtime_path_and_suffix() {
        let config = GeneratorConfig::builder()
            .runtime_path("crate::runtime")
            .suffix("_tool.rs")
            .build();
        let file = ToolGenerator::new(&config)
            .unwrap()
            .render(&weather_tool())
            .unwrap();
        assert!(file.content.contains("impl crate::runtime::Definable for WeatherTool"));
        assert!(file.path.ends_with("weather_tool.rs"));
    }

    #[test]
    fn test_invalid_template_output_is_rejected() {
        let generator = generator()
            .with_template("impl {{type_name}} {")
            .unwrap();
        let err = generator.render(&weather_tool()).unwrap_err();
        assert!(matches!(err, Error::InvalidOutput { .. }));
    }

    #[test]
    fn test_render_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut tool = weather_tool();
        tool.source_path = dir.path().join("weather.rs");

        let file = generator().render(&tool).unwrap();
        ToolGenerator::write(&file).unwrap();
        let written = std::fs::read_to_string(dir.path().join("weather_gen.rs")).unwrap();
        assert_eq!(written, file.content);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let file = GeneratedFile {
            tools: vec!["T".to_string()],
            path: PathBuf::from("/nonexistent/dir/t_gen.rs"),
            content: String::new(),
        };
        let err = ToolGenerator::write(&file).unwrap_err();
        assert!(err.is_generation_error());
    }
}
