use serde::Deserialize;

use crate::utils::time::format_unix_utc;

/// Response body of `GET /weather` (current conditions by city name).
/// Fields the provider sometimes omits are modelled as `Option` or given
/// a serde default rather than checked dynamically.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub coord: Option<Coord>,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Option<Wind>,
    pub dt: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    #[serde(default)]
    pub humidity: i64,
    pub pressure: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Response body of `GET /forecast` (5 day / 3 hour forecast).
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub list: Vec<ForecastSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

/// The fields the pipeline keeps from one current-weather fetch.
/// Lives for a single region pass; only the merged record is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: f64,
    pub humidity: i64,
    pub pressure: Option<i64>,
    pub description: String,
    pub wind_speed: f64,
    pub observed_at: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl WeatherReading {
    /// Distil a provider payload. A missing wind object reads as 0.0 and
    /// missing coordinates stay absent; neither blocks the reading.
    pub fn from_payload(
        city: &str,
        payload: &CurrentWeather,
        coordinates: Option<(f64, f64)>,
    ) -> Self {
        let description = payload
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            city: city.to_string(),
            temperature: payload.main.temp,
            humidity: payload.main.humidity,
            pressure: payload.main.pressure,
            description,
            wind_speed: payload.wind.map(|w| w.speed).unwrap_or(0.0),
            observed_at: format_unix_utc(payload.dt),
            latitude: coordinates.map(|(lat, _)| lat),
            longitude: coordinates.map(|(_, lon)| lon),
        }
    }
}
