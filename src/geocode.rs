//! Forward geocoding: place names to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use anyhow::Result;
use reqwest::{Client, Url};

use crate::config::WeatherConfig;
use crate::error::GeocodeError;
use crate::models::{Coordinates, NominatimPlace};

/// Geocoding adapter, built once at start-up and shared by every call.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.geocode_timeout)
            .build()?;

        Ok(Self {
            client,
            search_url: format!("{}/search", config.geocoder_base.trim_end_matches('/')),
        })
    }

    /// Best single match for a free-text query, `None` when nothing matches.
    pub async fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = Url::parse_with_params(
            &self.search_url,
            &[("q", query), ("format", "json"), ("limit", "1")],
        )
        .map_err(|e| GeocodeError::Config(format!("{}: {}", self.search_url, e)))?;

        let response = self.client.get(url).send().await.map_err(classify)?;

        if !response.status().is_success() {
            return Err(GeocodeError::Service(format!(
                "Request failed with status: {}",
                response.status()
            )));
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(classify)?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };

        let latitude = parse_degrees(&place.lat)?;
        let longitude = parse_degrees(&place.lon)?;
        Ok(Some(Coordinates {
            latitude,
            longitude,
        }))
    }
}

fn classify(e: reqwest::Error) -> GeocodeError {
    if e.is_timeout() {
        GeocodeError::Timeout
    } else {
        GeocodeError::Service(e.to_string())
    }
}

fn parse_degrees(raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse()
        .map_err(|_| GeocodeError::Service(format!("invalid coordinate {raw:?}")))
}

/// Query sent to the geocoder: `"city, region"` or just the city.
pub fn build_query(city: &str, region: Option<&str>) -> String {
    match region.filter(|r| !r.is_empty()) {
        Some(region) => format!("{}, {}", city, region),
        None => city.to_string(),
    }
}

/// Resolves a place name to coordinates.
///
/// Timeouts and service errors count as "not found". Anything else the
/// geocoder reports is returned to the caller.
pub async fn resolve(
    geocoder: &NominatimGeocoder,
    city: &str,
    region: Option<&str>,
) -> Result<Option<Coordinates>, GeocodeError> {
    let query = build_query(city, region);

    match geocoder.geocode(&query).await {
        Ok(found) => {
            if let Some(coords) = found {
                tracing::debug!(
                    "Geocoded {} to {}, {}",
                    query,
                    coords.latitude,
                    coords.longitude
                );
            }
            Ok(found)
        }
        Err(e @ (GeocodeError::Timeout | GeocodeError::Service(_))) => {
            tracing::warn!("Geocoding {} failed: {}", query, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
