use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CollectorError, Result};
use crate::utils::constants::{
    API_KEY_ENV, DEFAULT_CARBON_BASE_URL, DEFAULT_COUNTRY_CODE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_WEATHER_BASE_URL,
};

/// Everything the clients and the store need, constructed once in the CLI
/// layer and passed down. Base URLs are overridable so tests can point the
/// clients at fake endpoints.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub api_key: String,
    pub weather_base_url: String,
    pub carbon_base_url: String,
    pub output_file: PathBuf,
    pub country_code: String,
    pub timeout: Duration,
}

impl CollectorConfig {
    pub fn new(api_key: String, output_file: PathBuf) -> Self {
        Self {
            api_key,
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            carbon_base_url: DEFAULT_CARBON_BASE_URL.to_string(),
            output_file,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Resolve the API key from an explicit flag value, falling back to the
    /// `OWM_API_KEY` environment variable.
    pub fn resolve_api_key(flag: Option<String>) -> Result<String> {
        let key = match flag {
            Some(k) => k,
            None => std::env::var(API_KEY_ENV).map_err(|_| {
                CollectorError::Config(format!(
                    "no API key given: pass --api-key or set {}",
                    API_KEY_ENV
                ))
            })?,
        };

        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(CollectorError::Config("API key is empty".to_string()));
        }
        Ok(key)
    }

    pub fn with_country_code(mut self, country_code: &str) -> Self {
        self.country_code = country_code.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_weather_base_url(mut self, url: &str) -> Self {
        self.weather_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_carbon_base_url(mut self, url: &str) -> Self {
        self.carbon_base_url = url.trim_end_matches('/').to_string();
        self
    }
}
