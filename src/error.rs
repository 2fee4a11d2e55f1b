use thiserror::Error;

/// Failures reported by the geocoding provider
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request timed out")]
    Timeout,
    #[error("geocoding service error: {0}")]
    Service(String),
    #[error("geocoder misconfigured: {0}")]
    Config(String),
}

/// Faults that are not turned into a user-facing message and reach the tool
/// boundary as errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("malformed upstream response: {0}")]
    MalformedUpstream(String),
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}
