use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridweather")]
#[command(about = "UK weather and grid carbon-intensity collector")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

/// Arguments shared by every command that talks to the providers.
#[derive(Args, Clone)]
pub struct ProviderArgs {
    #[arg(
        short,
        long,
        help = "OpenWeatherMap API key [falls back to OWM_API_KEY]"
    )]
    pub api_key: Option<String>,

    #[arg(long, default_value = "GB", help = "Country code for coordinate lookup")]
    pub country: String,

    #[arg(long, default_value = "10", help = "Per-request timeout in seconds")]
    pub timeout_secs: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one collection pass over all regions
    Collect {
        #[command(flatten)]
        provider: ProviderArgs,

        #[arg(short, long, default_value = "weather_data.csv", help = "Output CSV file")]
        output: PathBuf,
    },

    /// Collect continuously on a fixed interval until Ctrl-C
    Watch {
        #[command(flatten)]
        provider: ProviderArgs,

        #[arg(short, long, default_value = "weather_data.csv", help = "Output CSV file")]
        output: PathBuf,

        #[arg(
            short,
            long,
            default_value = "60",
            help = "Minutes to wait between passes (0 = back to back)"
        )]
        interval_mins: u64,
    },

    /// List the region catalog
    Regions,

    /// Show the weather and national carbon-intensity forecast for one region
    Forecast {
        #[command(flatten)]
        provider: ProviderArgs,

        #[arg(short, long, help = "Catalog region id (1-17)")]
        region_id: u8,
    },

    /// Display information about an existing store file
    Info {
        #[arg(short, long, default_value = "weather_data.csv")]
        file: PathBuf,

        #[arg(short, long, default_value = "5", help = "Rows to show from the end")]
        sample: usize,
    },
}
