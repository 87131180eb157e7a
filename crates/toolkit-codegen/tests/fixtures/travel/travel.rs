use serde::Deserialize;
use toolkit::{Executable, ToolArgs};

/// +tool:name=geocode_tool
/// +tool:description=Geocode tool geocodes an address and returns the latitude and longitude.
#[derive(Debug)]
pub struct GeocodeTool(pub(crate) ToolArgs<GeocodeArgs>);

#[derive(Debug, Deserialize)]
pub struct GeocodeArgs {
    /// +arg: desc:"The address to geocode into latitude/longitude coordinates."
    pub address: String,
}

/// Plans a route between two places.
///
/// +tool:name=route_tool
/// +tool:description=Plans a route between two places
#[derive(Debug)]
pub struct RouteTool {
    pub(crate) args: ToolArgs<RouteArgs>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteArgs {
    /// +arg: desc:"Where the route starts"
    pub origin: String,
    /// +arg: desc:"Where the route ends"
    pub destination: String,
    /// +arg: desc:"Largest number of stops along the way" optional:"true"
    #[serde(default)]
    pub max_stops: i64,
}

impl Executable for GeocodeTool {
    fn execute(&self) -> String {
        self.0.arguments().map_or_else(
            || "no arguments".to_string(),
            |args| format!("{}: 59.91, 10.75", args.address),
        )
    }
}

impl Executable for RouteTool {
    fn execute(&self) -> String {
        self.args.arguments().map_or_else(
            || "no arguments".to_string(),
            |args| {
                format!(
                    "{} -> {} (at most {} stops)",
                    args.origin, args.destination, args.max_stops
                )
            },
        )
    }
}
