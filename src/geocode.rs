//! Reverse geocoding: coordinates to city, region and country names.
//! Uses Nominatim (OpenStreetMap), which needs no API key but does require a
//! user agent.

use reqwest::Client;
use std::time::Duration;

use crate::constants::{
    GEOCODER_USER_AGENT, GEOCODE_ZOOM, NOMINATIM_API_BASE, REQUEST_TIMEOUT_SECS,
};
use crate::error::{Result, WeatherError};
use crate::models::{Place, ReverseResponse};
use crate::tables::Locale;

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    /// Creates a geocoder against the public Nominatim instance
    pub fn new() -> Result<Self> {
        Self::with_base_url(NOMINATIM_API_BASE, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(GEOCODER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn reverse_url(&self, lat: f64, lon: f64, locale: Locale) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom={}&accept-language={}",
            self.base_url,
            lat,
            lon,
            GEOCODE_ZOOM,
            locale.tag()
        )
    }

    /// Looks up the place at `lat`/`lon` with names in `locale`.
    ///
    /// A response without an `address` object is not an error; it yields an
    /// empty [`Place`].
    pub async fn resolve(&self, lat: f64, lon: f64, locale: Locale) -> Result<Place> {
        let url = self.reverse_url(lat, lon, locale);
        tracing::debug!("Reverse geocoding: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: ReverseResponse = serde_json::from_str(&body)?;
        tracing::debug!("Nominatim display name: {:?}", parsed.display_name);

        let Some(address) = parsed.address else {
            tracing::warn!("No address for {}, {}", lat, lon);
            return Ok(Place::default());
        };

        let place = Place::from(address);
        tracing::info!(
            "Reverse geocoded to: {}, {}, {}",
            place.city,
            place.state,
            place.country
        );
        Ok(place)
    }
}
