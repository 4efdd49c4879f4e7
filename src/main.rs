mod cli;
mod prelude;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    debug!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Prices(args) => args.run()?,
        Command::Cheapest(args) => args.run()?,
    }

    debug!("done!");
    Ok(())
}
