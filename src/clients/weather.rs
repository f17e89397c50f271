use tracing::debug;

use crate::config::CollectorConfig;
use crate::error::Result;
use crate::models::weather::{CurrentWeather, Forecast};
use crate::utils::constants::WEATHER_UNITS;

/// OpenWeatherMap client. All calls are independent, idempotent GETs;
/// non-2xx statuses surface as errors via `error_for_status`.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    country_code: String,
}

impl WeatherClient {
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.weather_base_url.clone(),
            api_key: config.api_key.clone(),
            country_code: config.country_code.clone(),
        })
    }

    /// Current conditions for a city, metric units.
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather> {
        let url = format!("{}/weather", self.base_url);
        debug!(city, "fetching current weather");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", &self.api_key),
                ("units", WEATHER_UNITS),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<CurrentWeather>().await?)
    }

    /// Coordinates for a city, restricted to the configured country code.
    /// The provider embeds them in the current-weather payload; `Ok(None)`
    /// means a successful response without a coord object.
    pub async fn coordinates(&self, city: &str) -> Result<Option<(f64, f64)>> {
        let url = format!("{}/weather", self.base_url);
        let query = format!("{},{}", city, self.country_code);
        debug!(query = %query, "fetching coordinates");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", &self.api_key),
                ("units", WEATHER_UNITS),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload = response.json::<CurrentWeather>().await?;
        Ok(payload.coord.map(|c| (c.lat, c.lon)))
    }

    /// 5 day / 3 hour forecast. Not consumed by the merge pipeline; the
    /// `forecast` subcommand is its only caller.
    pub async fn forecast(&self, city: &str) -> Result<Forecast> {
        let url = format!("{}/forecast", self.base_url);
        debug!(city, "fetching forecast");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", &self.api_key),
                ("units", WEATHER_UNITS),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Forecast>().await?)
    }
}
