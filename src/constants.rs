use std::time::Duration;

/// User agent string for HTTP requests, also used as the geocoder identity
pub const USER_AGENT: &str = "weather-app/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Nominatim (OpenStreetMap) geocoding base URL
pub const GEOCODER_BASE: &str = "https://nominatim.openstreetmap.org";

/// Media type requested from the NWS API
pub const GEO_JSON: &str = "application/geo+json";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

/// Separator placed between rendered alert and forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
pub const DETAILED_FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";
