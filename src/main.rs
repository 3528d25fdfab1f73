use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabletop_chess::Config;

fn main() -> Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tabletop_chess::run(config)
}
