use tracing::debug;

use crate::config::CollectorConfig;
use crate::error::Result;
use crate::models::carbon::CarbonResponse;

/// National Grid carbon-intensity API client. No API key required.
pub struct CarbonClient {
    http: reqwest::Client,
    base_url: String,
}

impl CarbonClient {
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.carbon_base_url.clone(),
        })
    }

    /// Current intensity for one DNO region.
    pub async fn regional(&self, region_id: u8) -> Result<CarbonResponse> {
        let url = format!("{}/regional/regionid/{}", self.base_url, region_id);
        debug!(region_id, "fetching regional carbon intensity");
        self.get(&url).await
    }

    /// Current nation-wide intensity; the fallback tier when a regional
    /// payload carries no forecast value.
    pub async fn national(&self) -> Result<CarbonResponse> {
        let url = format!("{}/intensity", self.base_url);
        debug!("fetching national carbon intensity");
        self.get(&url).await
    }

    /// Forward-looking national intensity. Only the `forecast` subcommand
    /// consumes this.
    pub async fn national_forecast(&self) -> Result<CarbonResponse> {
        let url = format!("{}/intensity/forecast", self.base_url);
        debug!("fetching national carbon forecast");
        self.get(&url).await
    }

    async fn get(&self, url: &str) -> Result<CarbonResponse> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<CarbonResponse>().await?)
    }
}
