use clap::Parser;
use gridweather::cli::{run, Cli};
use gridweather::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
