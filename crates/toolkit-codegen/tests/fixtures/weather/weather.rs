use serde::Deserialize;
use toolkit::{Executable, ToolArgs};

/// Reports the current weather for a location.
///
/// +tool:name=weather_tool
/// +tool:description=WeatherTool reports the current weather for a location
#[derive(Debug)]
pub struct WeatherTool {
    pub(crate) args: ToolArgs<WeatherArgs>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherArgs {
    /// +arg: desc:"The city to report on"
    pub location: String,
    /// +arg: name:"days" desc:"Number of forecast days" optional:"true"
    #[serde(rename = "days", default)]
    pub forecast_days: i64,
}

impl Executable for WeatherTool {
    fn execute(&self) -> String {
        match self.args.arguments() {
            Some(args) if args.forecast_days > 0 => {
                format!("{}: sunny for {} days", args.location, args.forecast_days)
            }
            Some(args) => format!("{}: sunny", args.location),
            None => "no arguments".to_string(),
        }
    }
}
