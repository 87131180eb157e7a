// Code generated by toolkit-tools-gen. DO NOT EDIT.
// Source: weather.rs

#![allow(clippy::all, unused_imports)]

use super::weather::*;

// Arguments: WeatherArgs
impl ::toolkit::Definable for WeatherTool {
    fn definition(&self) -> ::toolkit::FunctionDefinition {
        ::toolkit::FunctionDefinition::new(
            "weather_tool",
            "WeatherTool reports the current weather for a location",
            ::toolkit::ParameterSchema::object()
                .property(
                    "days",
                    ::toolkit::SchemaType::Integer,
                    "Number of forecast days",
                )
                .property(
                    "location",
                    ::toolkit::SchemaType::String,
                    "The city to report on",
                )
                .required(&["location", ]),
        )
    }
}

impl ::toolkit::Parsable for WeatherTool {
    fn parse_arguments(&mut self, raw: &str) -> ::toolkit::Result<()> {
        self.args.parse_arguments(raw)
    }
}

impl WeatherTool {
    /// Creates the tool with an empty argument container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: ::toolkit::ToolArgs::default(),
        }
    }
}
