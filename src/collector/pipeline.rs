use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::clients::{CarbonClient, WeatherClient};
use crate::collector::merger;
use crate::config::CollectorConfig;
use crate::error::{CollectorError, Result};
use crate::models::carbon::CarbonReading;
use crate::models::record::CombinedRecord;
use crate::models::region::Region;
use crate::models::weather::WeatherReading;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvStore;

/// Outcome of one sweep over the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub appended: usize,
    pub skipped: usize,
}

/// The fetch-merge-append pipeline: one weather client, one carbon
/// client, one store, driven sequentially over the region catalog.
pub struct Collector {
    weather: WeatherClient,
    carbon: CarbonClient,
    store: CsvStore,
}

impl Collector {
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        Ok(Self {
            weather: WeatherClient::new(config)?,
            carbon: CarbonClient::new(config)?,
            store: CsvStore::new(config.output_file.clone()),
        })
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    /// Fetch, merge and append one region. Weather failure and a fully
    /// exhausted carbon fallback chain abort the region; a failed
    /// coordinate lookup only degrades to absent coordinates.
    pub async fn collect_region(&self, region: &Region) -> Result<CombinedRecord> {
        let payload = self
            .weather
            .current_weather(region.weather_name)
            .await
            .map_err(|e| CollectorError::WeatherUnavailable {
                city: region.weather_name.to_string(),
                reason: e.to_string(),
            })?;

        let coordinates = match self.weather.coordinates(region.weather_name).await {
            Ok(c) => c,
            Err(e) => {
                warn!(city = region.weather_name, error = %e, "coordinate lookup failed");
                None
            }
        };

        let weather = WeatherReading::from_payload(region.weather_name, &payload, coordinates);
        let carbon = self.carbon_reading(region).await?;
        let record = CombinedRecord::merge(region.id, weather, carbon);

        self.store.append(&record)?;
        Ok(record)
    }

    /// Regional data first; national data when the regional payload lacks
    /// a forecast value or the fetch itself fails.
    async fn carbon_reading(&self, region: &Region) -> Result<CarbonReading> {
        match self.carbon.regional(region.id).await {
            Ok(response) => {
                if let Some(reading) = merger::regional_reading(&response, region.carbon_name) {
                    return Ok(reading);
                }
                info!(
                    region_id = region.id,
                    "regional payload incomplete, falling back to national"
                );
            }
            Err(e) => {
                warn!(region_id = region.id, error = %e, "regional carbon fetch failed, falling back to national");
            }
        }

        let national = self
            .carbon
            .national()
            .await
            .map_err(|e| CollectorError::CarbonUnavailable {
                region_id: region.id,
                reason: e.to_string(),
            })?;

        merger::national_reading(&national).ok_or_else(|| CollectorError::CarbonUnavailable {
            region_id: region.id,
            reason: "national payload has no entries".to_string(),
        })
    }

    /// One sweep over the whole catalog in ascending id order. Per-region
    /// failures are logged and skipped so one dead provider never stops
    /// the rest; store errors propagate.
    pub async fn run_pass(&self, progress: Option<&ProgressReporter>) -> Result<PassSummary> {
        let mut summary = PassSummary::default();

        for region in Region::catalog() {
            if let Some(p) = progress {
                p.set_message(&format!("Collecting {}...", region.weather_name));
            }

            match self.collect_region(region).await {
                Ok(record) => {
                    info!(
                        city = %record.city,
                        region = %record.region_name,
                        intensity = ?record.carbon_intensity,
                        "record appended"
                    );
                    summary.appended += 1;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(region_id = region.id, error = %e, "skipping region");
                    summary.skipped += 1;
                }
            }

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        Ok(summary)
    }

    /// Repeat passes forever, sleeping `interval` between them, until the
    /// shutdown channel flips. The sleep is cancellable, so Ctrl-C ends a
    /// run promptly instead of waiting out the interval. A zero interval
    /// starts the next pass immediately; passes never overlap.
    pub async fn run_continuous(
        &self,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        let mut pass = 0u64;
        loop {
            pass += 1;
            let summary = self.run_pass(None).await?;
            info!(
                pass,
                appended = summary.appended,
                skipped = summary.skipped,
                "pass complete"
            );

            if *shutdown.borrow() {
                info!("shutdown requested, stopping");
                return Ok(());
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("shutdown requested, stopping");
                        return Ok(());
                    }
                }
            }
        }
    }
}
