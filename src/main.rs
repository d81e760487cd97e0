//! food-fixture - synthetic food photo generator for test fixtures.

mod adapters;
mod cli;
mod config;
mod error;
mod fonts;
mod generator;
mod output;
mod params;
mod ports;
mod render;
mod scene;

use std::process;

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::FixtureError;
use crate::generator::generate;
use crate::params::GenerateOptions;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked here.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<(), FixtureError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    debug!("Config: {}", config_path.display());
    let config = Config::load(&config_path).map_err(FixtureError::Config)?;

    let options = GenerateOptions::resolve(cli, &config).map_err(FixtureError::InvalidArgument)?;

    let generated = match options.seed {
        Some(seed) => generate(&options, &mut StdRng::seed_from_u64(seed))?,
        None => generate(&options, &mut rand::rng())?,
    };
    debug!(
        "Background {:?}, {:?} font, label origin {:?}",
        generated.background.0, generated.font, generated.placement.origin
    );

    println!("テスト画像を作成しました: {}", options.output.display());
    Ok(())
}
