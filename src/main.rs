use clap::Parser;
use station_normalizer::cli::{run, Cli};
use station_normalizer::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
