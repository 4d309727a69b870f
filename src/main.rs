use anyhow::Result;
use clap::Parser;
use climate_odds::{cli::Cli, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::target(cli.log_file.as_deref(), cli.one_shot))?;
    climate_odds::run(cli).await
}
