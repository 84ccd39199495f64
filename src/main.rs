use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use travelgen::config::LoggingConfig;
use travelgen::generator::now;
use travelgen::{TravelGenConfig, TravelGenError};

/// Generate synthetic flight and accommodation CSV data
#[derive(Parser, Debug)]
#[command(name = "travelgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of flights to generate
    #[arg(long)]
    flights: Option<usize>,

    /// Number of accommodations to generate
    #[arg(long)]
    accommodations: Option<usize>,

    /// Directory the CSV files are written to
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging and echo the effective configuration
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress the summary printout
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn to_config(&self) -> Result<TravelGenConfig> {
        let mut config = TravelGenConfig::load_from_path(self.config.clone())?;

        if let Some(flights) = self.flights {
            config.generation.flights = flights;
        }
        if let Some(accommodations) = self.accommodations {
            config.generation.accommodations = accommodations;
        }
        if let Some(directory) = &self.output_dir {
            config.output.directory.clone_from(directory);
        }
        if self.seed.is_some() {
            config.generation.seed = self.seed;
        }

        config
            .validate()
            .context("Invalid command line overrides")?;
        Ok(config)
    }
}

fn setup_logging(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if logging.format == "pretty" {
        builder.pretty().init();
    } else {
        builder.compact().init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&config.logging, cli.verbose);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Generation failed: {e:?}");
            match e.downcast_ref::<TravelGenError>() {
                Some(travel_error) => eprintln!("Error: {}", travel_error.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &TravelGenConfig) -> Result<()> {
    info!("Starting travelgen v{}", travelgen::VERSION);
    if cli.verbose {
        debug!("Effective configuration: {config:#?}");
    }

    let summary = travelgen::run(config, now())?;

    if !cli.quiet {
        println!("{}", summary.report());
    }
    Ok(())
}
