//! `travelgen` - Synthetic flight and accommodation data for travel planning
//!
//! This library generates realistic but fictional flight schedules and
//! accommodation listings from a fixed reference catalog and writes them
//! as CSV tables for database seeding and testing.

pub mod catalog;
pub mod config;
pub mod csv_writer;
pub mod error;
pub mod generator;
pub mod models;
pub mod pipeline;

// Re-export core types for public API
pub use catalog::ReferenceCatalog;
pub use config::TravelGenConfig;
pub use csv_writer::{CsvOutcome, read_csv, write_csv};
pub use error::TravelGenError;
pub use generator::{
    AccommodationGenerator, FlightGenerator, generate_accommodations, generate_flights,
};
pub use models::{AccommodationRecord, FlightRecord};
pub use pipeline::{RunSummary, run};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
