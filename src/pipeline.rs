//! End-to-end generation run: seed, generate, write, summarize

use std::path::PathBuf;

use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

use crate::config::{MAX_RECORDS, TravelGenConfig};
use crate::csv_writer::{CsvOutcome, write_csv};
use crate::generator::{AccommodationGenerator, FlightGenerator};
use crate::models::{AccommodationRecord, FlightRecord};
use crate::{Result, TravelGenError};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Seed the run was generated with; pass it back to reproduce the output
    pub seed: u64,
    pub output_directory: PathBuf,
    pub flights: CsvOutcome,
    pub accommodations: CsvOutcome,
    pub sample_flight: Option<FlightRecord>,
    pub sample_accommodation: Option<AccommodationRecord>,
}

impl RunSummary {
    /// Human-readable report printed by the binary
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = vec![
            format!("Seed: {}", self.seed),
            describe_outcome("flights", &self.flights),
            describe_outcome("accommodations", &self.accommodations),
        ];
        if let Some(flight) = &self.sample_flight {
            lines.push(format!("Sample flight: {}", flight.summary()));
        }
        if let Some(accommodation) = &self.sample_accommodation {
            lines.push(format!("Sample accommodation: {}", accommodation.summary()));
        }
        lines.join("\n")
    }
}

fn describe_outcome(label: &str, outcome: &CsvOutcome) -> String {
    match outcome {
        CsvOutcome::Written { path, rows } => {
            format!("Wrote {rows} {label} to {}", path.display())
        }
        CsvOutcome::Skipped => format!("No {label} requested, nothing written"),
    }
}

/// Generate both tables and write them under the configured output directory.
///
/// `generated_at` stamps `created_at`/`updated_at` and anchors the departure window.
#[instrument(skip_all, fields(flights = config.generation.flights, accommodations = config.generation.accommodations))]
pub fn run(config: &TravelGenConfig, generated_at: NaiveDateTime) -> Result<RunSummary> {
    let generation = &config.generation;
    if generation.flights > MAX_RECORDS || generation.accommodations > MAX_RECORDS {
        return Err(TravelGenError::validation(format!(
            "at most {MAX_RECORDS} records per table can be generated"
        )));
    }

    let seed = generation.seed.unwrap_or_else(rand::random);
    info!(seed, "Starting generation run");
    let mut rng = StdRng::seed_from_u64(seed);

    info!("Generating flight data");
    let flights = FlightGenerator::builtin(generated_at).generate(&mut rng, generation.flights);
    let flights_outcome = write_csv(&flights, config.output.flights_path())?;

    info!("Generating accommodation data");
    let accommodations = AccommodationGenerator::builtin(generated_at)
        .generate(&mut rng, generation.accommodations);
    let accommodations_outcome = write_csv(&accommodations, config.output.accommodations_path())?;

    info!(
        flights = flights_outcome.rows(),
        accommodations = accommodations_outcome.rows(),
        "Data generation complete"
    );

    Ok(RunSummary {
        seed,
        output_directory: PathBuf::from(&config.output.directory),
        flights: flights_outcome,
        accommodations: accommodations_outcome,
        sample_flight: flights.into_iter().next(),
        sample_accommodation: accommodations.into_iter().next(),
    })
}
