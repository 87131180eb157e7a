// Code generated by toolkit-tools-gen. DO NOT EDIT.
// Source: travel.rs

#![allow(clippy::all, unused_imports)]

use super::travel::*;

// Arguments: GeocodeArgs
impl ::toolkit::Definable for GeocodeTool {
    fn definition(&self) -> ::toolkit::FunctionDefinition {
        ::toolkit::FunctionDefinition::new(
            "geocode_tool",
            "Geocode tool geocodes an address and returns the latitude and longitude.",
            ::toolkit::ParameterSchema::object()
                .property(
                    "address",
                    ::toolkit::SchemaType::String,
                    "The address to geocode into latitude/longitude coordinates.",
                )
                .required(&["address", ]),
        )
    }
}

impl ::toolkit::Parsable for GeocodeTool {
    fn parse_arguments(&mut self, raw: &str) -> ::toolkit::Result<()> {
        self.0.parse_arguments(raw)
    }
}

impl GeocodeTool {
    /// Creates the tool with an empty argument container.
    #[must_use]
    pub fn new() -> Self {
        Self(::toolkit::ToolArgs::default())
    }
}

// Arguments: RouteArgs
impl ::toolkit::Definable for RouteTool {
    fn definition(&self) -> ::toolkit::FunctionDefinition {
        ::toolkit::FunctionDefinition::new(
            "route_tool",
            "Plans a route between two places",
            ::toolkit::ParameterSchema::object()
                .property(
                    "destination",
                    ::toolkit::SchemaType::String,
                    "Where the route ends",
                )
                .property(
                    "maxStops",
                    ::toolkit::SchemaType::Integer,
                    "Largest number of stops along the way",
                )
                .property(
                    "origin",
                    ::toolkit::SchemaType::String,
                    "Where the route starts",
                )
                .required(&["destination", "origin", ]),
        )
    }
}

impl ::toolkit::Parsable for RouteTool {
    fn parse_arguments(&mut self, raw: &str) -> ::toolkit::Result<()> {
        self.args.parse_arguments(raw)
    }
}

impl RouteTool {
    /// Creates the tool with an empty argument container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            args: ::toolkit::ToolArgs::default(),
        }
    }
}
