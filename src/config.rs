use std::time::Duration;

use crate::constants::{GEOCODER_BASE, GEOCODE_TIMEOUT, NWS_API_BASE, REQUEST_TIMEOUT, USER_AGENT};

/// Endpoints, identity and timeouts used by the weather service.
///
/// The server always runs with [`WeatherConfig::default`]; the fields exist so
/// the base URLs can be pointed somewhere else (a local mock server in tests).
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub nws_api_base: String,
    pub geocoder_base: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub geocode_timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            nws_api_base: NWS_API_BASE.to_string(),
            geocoder_base: GEOCODER_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            geocode_timeout: GEOCODE_TIMEOUT,
        }
    }
}

impl WeatherConfig {
    /// Config with both upstream services rooted at `base`
    #[cfg(test)]
    pub fn with_base(base: &str) -> Self {
        Self {
            nws_api_base: base.to_string(),
            geocoder_base: base.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_public_endpoints() {
        let config = WeatherConfig::default();
        assert_eq!(config.nws_api_base, "https://api.weather.gov");
        assert_eq!(config.geocoder_base, "https://nominatim.openstreetmap.org");
        assert_eq!(config.user_agent, "weather-app/1.0");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.geocode_timeout, Duration::from_secs(10));
    }
}
