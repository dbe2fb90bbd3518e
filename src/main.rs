//! Binary entry point: read configuration, set up logging and hand over to the
//! HTTP server.
use book_catalog::{logging::init_logging, run, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.verbose)?;
    run(config).await
}
