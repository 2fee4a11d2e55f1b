use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;

use crate::client::NwsClient;
use crate::config::WeatherConfig;
use crate::constants::{
    ALERTS_UNAVAILABLE, DETAILED_FORECAST_UNAVAILABLE, FORECAST_UNAVAILABLE, NO_ACTIVE_ALERTS,
};
use crate::error::WeatherError;
use crate::formatters::{format_alerts, format_forecast};
use crate::geocode::{build_query, resolve, NominatimGeocoder};
use crate::models::{
    AlertFeature, ForecastResponse, GetAlertsRequest, GetForecastByCityRequest,
    GetForecastRequest, PointsResponse,
};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    nws: Arc<NwsClient>,
    geocoder: Arc<NominatimGeocoder>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self {
            nws: Arc::new(NwsClient::new(config)?),
            geocoder: Arc::new(NominatimGeocoder::new(config)?),
            tool_router: Self::tool_router(),
        })
    }

    /// Active alerts for a state, or one of the two alert sentinels
    pub async fn alerts(&self, state: &str) -> Result<String, WeatherError> {
        let url = self.nws.url(&format!("/alerts/active/area/{}", state));

        let Some(mut data) = self.nws.fetch(&url).await.filter(has_content) else {
            return Ok(ALERTS_UNAVAILABLE.to_string());
        };

        // A missing collection reads the same as a failed request.
        let Some(features) = data.get_mut("features").map(Value::take) else {
            return Ok(ALERTS_UNAVAILABLE.to_string());
        };

        if !has_content(&features) {
            return Ok(NO_ACTIVE_ALERTS.to_string());
        }

        let features: Vec<AlertFeature> = serde_json::from_value(features)
            .map_err(|e| WeatherError::MalformedUpstream(format!("alert features: {}", e)))?;

        Ok(format_alerts(&features))
    }

    /// Forecast for a coordinate pair via the points lookup and its forecast URL
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let points_url = self.nws.url(&format!("/points/{:?},{:?}", latitude, longitude));

        let Some(points) = self.nws.fetch(&points_url).await.filter(has_content) else {
            return Ok(FORECAST_UNAVAILABLE.to_string());
        };
        let points: PointsResponse = serde_json::from_value(points)
            .map_err(|e| WeatherError::MalformedUpstream(format!("points response: {}", e)))?;

        let forecast_url = points.properties.forecast;
        let Some(forecast) = self.nws.fetch(&forecast_url).await.filter(has_content) else {
            return Ok(DETAILED_FORECAST_UNAVAILABLE.to_string());
        };
        let forecast: ForecastResponse = serde_json::from_value(forecast)
            .map_err(|e| WeatherError::MalformedUpstream(format!("forecast response: {}", e)))?;

        Ok(format_forecast(&forecast.properties.periods))
    }

    /// Geocodes a city and hands the coordinates to [`Weather::forecast`]
    pub async fn forecast_by_city(
        &self,
        city: &str,
        state: Option<&str>,
    ) -> Result<String, WeatherError> {
        match resolve(&self.geocoder, city, state).await? {
            Some(coords) => self.forecast(coords.latitude, coords.longitude).await,
            None => Ok(format!(
                "Unable to find coordinates for {}.",
                build_query(city, state)
            )),
        }
    }
}

/// Null, `{}` and `[]` carry nothing and count as a missing document
fn has_content(document: &Value) -> bool {
    match document {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn tool_output(result: Result<String, WeatherError>) -> Result<CallToolResult, McpError> {
    let text = result.map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and forecasts from the National Weather Service API. \
                Look up a forecast by coordinates, or by city name for US locations."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter US state code (e.g. CA, NY).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        tool_output(self.alerts(&request.state).await)
    }

    /// Gets the weather forecast for a coordinate pair
    #[tool(description = "Get weather forecast for a location. Provide latitude and longitude (e.g. latitude: 38.8894, longitude: -77.0352 for Washington, DC).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        tool_output(self.forecast(request.latitude, request.longitude).await)
    }

    /// Gets the weather forecast for a city by name
    #[tool(description = "Get a 7-day weather forecast for a city. Provide the city name and, optionally, a US state code (e.g. CA, NY) for better accuracy.")]
    async fn get_forecast_by_city(
        &self,
        Parameters(request): Parameters<GetForecastByCityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for city: {}",
            build_query(&request.city, request.state.as_deref())
        );

        tool_output(
            self.forecast_by_city(&request.city, request.state.as_deref())
                .await,
        )
    }
}
