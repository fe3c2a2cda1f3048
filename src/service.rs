use chrono::NaiveDateTime;
use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{REQUEST_TIMEOUT_SECS, USER_AGENT, WTTR_API_BASE};
use crate::error::{Result, WeatherError};
use crate::numeral::parse_obs_timestamp;
use crate::parser;
use crate::schema::{FieldId, FieldStore};

/// Percent-encodes a location for the wttr.in path.
///
/// Every byte outside `[A-Za-z0-9._~-]` becomes `%XX`. An empty location stays
/// empty, which makes wttr.in use the caller's network location.
pub fn encode_location(location: &str) -> String {
    urlencoding::encode(location).into_owned()
}

/// Fetches wttr.in conditions and keeps the last parsed fields
#[derive(Debug, Clone)]
pub struct Weather {
    client: Client,
    base_url: String,
    store: FieldStore,
}

impl Weather {
    /// Client for the public wttr.in host with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_base_url(WTTR_API_BASE, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config.weather_url.as_str(), config.timeout())
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store: FieldStore::wttr(),
        })
    }

    fn weather_url(&self, location: &str) -> String {
        format!("{}/{}?format=j1", self.base_url, encode_location(location))
    }

    /// Body of a successful wttr.in response; non-2xx statuses become `Status`
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Fetches conditions for `location` (place name, "lat,lon", or empty for
    /// the caller's own location) and refreshes the stored fields.
    ///
    /// On failure the previously stored values are kept.
    pub async fn update(&mut self, location: &str) -> Result<()> {
        if location.is_empty() {
            tracing::info!("Getting weather for current location");
        } else {
            tracing::info!("Getting weather for: {}", location);
        }

        let url = self.weather_url(location);
        tracing::debug!("Requesting {}", url);

        let body = self.fetch(&url).await?;
        if body.trim().is_empty() {
            return Err(WeatherError::EmptyResponse);
        }
        tracing::debug!("Response body: {}", body);

        parser::parse_str(&body, &mut self.store)
    }

    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.store.get(id)
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    /// Latitude and longitude of the nearest area, if they parse as numbers
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.get(FieldId::Latitude)?.parse().ok()?;
        let lon = self.get(FieldId::Longitude)?.parse().ok()?;
        Some((lat, lon))
    }

    /// Local observation time reported by wttr.in
    pub fn observed_at(&self) -> Result<NaiveDateTime> {
        parse_obs_timestamp(self.get(FieldId::ObsDateTime).unwrap_or_default())
    }
}
