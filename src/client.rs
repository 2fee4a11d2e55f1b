use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::constants::GEO_JSON;

/// GET-only client for the National Weather Service API
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base: String,
}

impl NwsClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        // No idle pooling: every request gets its own connection.
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            base: config.nws_api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path such as `/alerts/active/area/CA`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Fetches a JSON document, or `None` if anything at all goes wrong.
    pub async fn fetch(&self, url: &str) -> Option<Value> {
        match self.make_request(url).await {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::debug!("NWS request to {} failed: {:#}", url, e);
                None
            }
        }
    }

    async fn make_request(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let data = response.json::<Value>().await?;
        Ok(data)
    }
}
