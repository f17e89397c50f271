use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::watch;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands, ProviderArgs};
use crate::clients::{CarbonClient, WeatherClient};
use crate::collector::{summarize_forecast, Collector};
use crate::config::CollectorConfig;
use crate::error::{CollectorError, Result};
use crate::models::region::Region;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvStore;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Collect { provider, output } => {
            let config = build_config(provider, output)?;
            let collector = Collector::new(&config)?;

            let progress = ProgressReporter::new(
                Region::catalog().len() as u64,
                "Collecting weather and carbon intensity...",
                cli.verbose,
            );

            let summary = collector.run_pass(Some(&progress)).await?;
            progress.finish_with_message("Pass complete");

            println!(
                "Appended {} records ({} regions skipped) to {}",
                summary.appended,
                summary.skipped,
                config.output_file.display()
            );
        }

        Commands::Watch {
            provider,
            output,
            interval_mins,
        } => {
            let config = build_config(provider, output)?;
            let collector = Collector::new(&config)?;
            let interval = Duration::from_secs(interval_mins * 60);

            println!(
                "Collecting every {} minutes to {} (Ctrl-C to stop)",
                interval_mins,
                config.output_file.display()
            );

            let (tx, rx) = watch::channel(false);
            tokio::spawn(async move {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!(error = %e, "failed to listen for Ctrl-C");
                }
                let _ = tx.send(true);
            });

            collector.run_continuous(interval, rx).await?;
            println!("Stopped");
        }

        Commands::Regions => {
            println!("{:>3}  {:<22} {}", "id", "weather city", "carbon region");
            for region in Region::catalog() {
                println!(
                    "{:>3}  {:<22} {}",
                    region.id, region.weather_name, region.carbon_name
                );
            }
        }

        Commands::Forecast { provider, region_id } => {
            let region =
                Region::by_id(region_id).ok_or(CollectorError::RegionNotFound(region_id))?;
            // The forecast view never writes, so any output path works here.
            let config = build_config(provider, PathBuf::new())?;

            let weather = WeatherClient::new(&config)?;
            let carbon = CarbonClient::new(&config)?;

            println!("Forecast for {} (region {})", region.weather_name, region.id);
            let forecast = weather.forecast(region.weather_name).await?;
            for day in summarize_forecast(&forecast) {
                println!(
                    "  {}: {:.1}°C to {:.1}°C, {}",
                    day.date, day.min_temp, day.max_temp, day.condition
                );
            }

            println!("\nNational carbon intensity forecast:");
            let national = carbon.national_forecast().await?;
            for entry in national.data.iter().take(8) {
                let from = entry.from.as_deref().unwrap_or("-");
                match &entry.intensity {
                    Some(i) => println!(
                        "  {}: forecast {} gCO2/kWh ({})",
                        from,
                        i.forecast.map_or("-".to_string(), |v| v.to_string()),
                        i.index.as_deref().unwrap_or("N/A")
                    ),
                    None => println!("  {}: no intensity data", from),
                }
            }
        }

        Commands::Info { file, sample } => {
            let store = CsvStore::new(file);
            let records = store.read_records()?;

            println!("Store: {}", store.path().display());
            println!("Rows: {}", records.len());

            if let (Some(first), Some(last)) = (records.first(), records.last()) {
                println!("First collected: {}", first.collected_at);
                println!("Last collected:  {}", last.collected_at);
            }

            if sample > 0 && !records.is_empty() {
                println!("\nMost recent rows:");
                for record in records.iter().rev().take(sample).rev() {
                    println!(
                        "  {} {}: {:.1}°C, {}, intensity {} ({}) [{}]",
                        record.collected_at,
                        record.city,
                        record.temperature,
                        record.weather_description,
                        record
                            .carbon_intensity
                            .map_or("-".to_string(), |v| v.to_string()),
                        record.carbon_index,
                        record.region_name
                    );
                }
            }
        }
    }

    Ok(())
}

fn build_config(provider: ProviderArgs, output: PathBuf) -> Result<CollectorConfig> {
    let api_key = CollectorConfig::resolve_api_key(provider.api_key)?;
    Ok(CollectorConfig::new(api_key, output)
        .with_country_code(&provider.country)
        .with_timeout_secs(provider.timeout_secs))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "gridweather=debug"
    } else {
        "gridweather=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
