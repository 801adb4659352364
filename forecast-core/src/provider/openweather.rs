use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{ForecastPayload, ResolvedLocation, Units};

use super::{ForecastProvider, ResolveError};

const GEOCODING_URL: &str = "http://api.openweathermap.org/geo/1.0/direct";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Client for OpenWeather's geocoding and 5-day forecast endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn fetch_matches(&self, city: &str) -> Result<Vec<OwGeoMatch>> {
        let res = self
            .http
            .get(GEOCODING_URL)
            .query(&[
                ("q", city),
                // The endpoint can return several candidates; one is enough.
                ("limit", "1"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (geocoding)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather geocoding response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        debug!(%city, body = %truncate_body(&body), "geocoding response");

        let matches: Vec<OwGeoMatch> =
            serde_json::from_str(&body).context("Failed to parse OpenWeather geocoding JSON")?;

        Ok(matches)
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn geocode(&self, city: &str) -> Result<ResolvedLocation, ResolveError> {
        let matches = self.fetch_matches(city).await?;

        classify_matches(matches, city)
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<ForecastPayload> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("units", units.as_query_param()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (5-day forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: ForecastPayload =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        debug!(buckets = parsed.list.len(), "forecast payload parsed");

        Ok(parsed)
    }
}

/// Turn the provider's match list into the pipeline's outcome: an empty list
/// is the recoverable not-found case, otherwise the first match wins.
fn classify_matches(
    matches: Vec<OwGeoMatch>,
    city: &str,
) -> Result<ResolvedLocation, ResolveError> {
    let Some(m) = matches.into_iter().next() else {
        return Err(ResolveError::NotFound { city: city.to_string() });
    };

    Ok(ResolvedLocation {
        latitude: m.lat,
        longitude: m.lon,
        name: m.name,
        region: m.state,
        country: m.country,
    })
}

#[derive(Debug, Deserialize)]
struct OwGeoMatch {
    lat: f64,
    lon: f64,
    name: String,
    // Some countries have no region subdivision in the provider's records.
    state: Option<String>,
    country: String,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Bodies can carry multibyte text (e.g. local_names in geocode
    // responses); back the cut up to a char boundary.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }

    format!("{}...", &body[..cut])
}
