use serde::{Deserialize, Serialize};

use crate::models::carbon::CarbonReading;
use crate::models::weather::WeatherReading;
use crate::utils::time::now_utc;

/// The unit of persistence: one flat row per successful (city, region)
/// pass. Field order here is the store's column order; the CSV header is
/// derived from these names, so renames are schema changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub city: String,
    pub temperature: f64,
    pub humidity: i64,
    pub pressure: Option<i64>,
    pub weather_description: String,
    pub wind_speed: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub weather_observed_at: String,
    pub region_id: u8,
    pub region_name: String,
    pub carbon_intensity: Option<i32>,
    pub carbon_forecast: Option<i32>,
    pub carbon_index: String,
    pub carbon_from: Option<String>,
    pub collected_at: String,
}

impl CombinedRecord {
    /// Field-wise merge of the two readings. `collected_at` is stamped
    /// here, at merge time, and is distinct from either source's own
    /// embedded timestamp.
    pub fn merge(region_id: u8, weather: WeatherReading, carbon: CarbonReading) -> Self {
        Self::merge_at(region_id, weather, carbon, now_utc())
    }

    /// Merge with an explicit collection timestamp (tests).
    pub fn merge_at(
        region_id: u8,
        weather: WeatherReading,
        carbon: CarbonReading,
        collected_at: String,
    ) -> Self {
        Self {
            city: weather.city,
            temperature: weather.temperature,
            humidity: weather.humidity,
            pressure: weather.pressure,
            weather_description: weather.description,
            wind_speed: weather.wind_speed,
            latitude: weather.latitude,
            longitude: weather.longitude,
            weather_observed_at: weather.observed_at,
            region_id,
            region_name: carbon.region_name,
            carbon_intensity: carbon.intensity,
            carbon_forecast: carbon.forecast,
            carbon_index: carbon.index,
            carbon_from: carbon.observed_at,
            collected_at,
        }
    }
}
