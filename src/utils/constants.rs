/// Provider endpoints
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_CARBON_BASE_URL: &str = "https://api.carbonintensity.org.uk";

/// Environment variable consulted when --api-key is not given
pub const API_KEY_ENV: &str = "OWM_API_KEY";

/// Collection defaults
pub const DEFAULT_OUTPUT_FILE: &str = "weather_data.csv";
pub const DEFAULT_COUNTRY_CODE: &str = "GB";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_INTERVAL_MINS: u64 = 60;

/// Units requested from the weather provider
pub const WEATHER_UNITS: &str = "metric";

/// Substitute values for absent carbon fields
pub const NATIONAL_REGION_NAME: &str = "National";
pub const MISSING_INDEX: &str = "N/A";

/// Timestamp layout used for every persisted time column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
