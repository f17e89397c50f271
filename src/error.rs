use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Weather data unavailable for {city}: {reason}")]
    WeatherUnavailable { city: String, reason: String },

    #[error("Carbon intensity unavailable for region {region_id}: {reason}")]
    CarbonUnavailable { region_id: u8, reason: String },

    #[error("Region {0} not found in catalog")]
    RegionNotFound(u8),

    #[error("Missing required data: {0}")]
    MissingData(String),
}

impl CollectorError {
    /// Errors that abort the whole run rather than skip one region.
    /// A store that stops accepting rows has no repair path, so nothing
    /// is gained by sweeping the remaining regions.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CollectorError::Io(_) | CollectorError::Csv(_))
    }
}
