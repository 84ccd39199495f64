//! Flight record generation

use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::{Rng, RngExt};
use tracing::debug;

use super::{pick, sample_place, sample_place_outside};
use crate::Result;
use crate::catalog::ReferenceCatalog;
use crate::models::{BaggageAllowance, FlightRecord, FlightStatus, Layovers, MealService};

/// Departures fall on one of the next this-many days
pub const SCHEDULE_WINDOW_DAYS: i64 = 365;
const DEPARTURE_MINUTES: [i64; 4] = [0, 15, 30, 45];

/// Builds flight rows from a reference catalog
#[derive(Debug, Clone)]
pub struct FlightGenerator<'c> {
    catalog: &'c ReferenceCatalog,
    generated_at: NaiveDateTime,
}

impl FlightGenerator<'static> {
    /// Generator over the built-in catalog
    #[must_use]
    pub fn builtin(generated_at: NaiveDateTime) -> Self {
        Self {
            catalog: ReferenceCatalog::builtin(),
            generated_at,
        }
    }
}

impl<'c> FlightGenerator<'c> {
    /// Generator over a custom catalog, rejected if it cannot support sampling
    pub fn new(catalog: &'c ReferenceCatalog, generated_at: NaiveDateTime) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            generated_at,
        })
    }

    /// Generate exactly `count` flights
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<FlightRecord> {
        let flights: Vec<FlightRecord> = (0..count).map(|_| self.generate_one(rng)).collect();
        debug!(count = flights.len(), "Generated flights");
        flights
    }

    /// Generate a single flight
    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> FlightRecord {
        let origin = sample_place(rng, self.catalog);
        let destination = sample_place_outside(rng, self.catalog, origin.country);

        let departure_airport = self.catalog.airport_code(origin.country, origin.city);
        let arrival_airport = self.catalog.airport_code(destination.country, destination.city);

        let airline = *pick(rng, self.catalog.airlines);
        let departure_time = self.departure_time(rng);
        let duration_minutes: u32 = rng.random_range(60..=1440);
        let arrival_time = departure_time + Duration::minutes(i64::from(duration_minutes));

        let price_economy: u32 = rng.random_range(200..=2000);
        let price_business = scale_fare(price_economy, rng.random_range(2.5..=4.0));
        let price_first = scale_fare(price_economy, rng.random_range(5.0..=8.0));

        FlightRecord {
            flight_id: format!("FL{}", rng.random_range(100_000..=999_999)),
            flight_number: format!(
                "{}{}",
                self.catalog.carrier_code(airline),
                rng.random_range(1000..=9999)
            ),
            airline: airline.to_string(),
            aircraft_type: pick(rng, self.catalog.aircraft_types).to_string(),
            departure_airport,
            arrival_airport,
            departure_time,
            arrival_time,
            duration_minutes,
            available_seats: rng.random_range(50..=400),
            seat_configuration: pick(rng, self.catalog.seat_configurations).to_string(),
            price_economy,
            price_business,
            price_first,
            meal_service: *pick(rng, MealService::ALL),
            baggage_allowance: *pick(rng, BaggageAllowance::ALL),
            layovers: *pick(rng, Layovers::ALL),
            status: *pick(rng, FlightStatus::ALL),
            created_at: self.generated_at,
            updated_at: self.generated_at,
        }
    }

    /// Midnight of the generation date plus 1..=365 days, a random hour and a quarter-hour
    fn departure_time<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let midnight = self.generated_at.date().and_time(NaiveTime::MIN);
        let days = rng.random_range(1..=SCHEDULE_WINDOW_DAYS);
        let hour = rng.random_range(0..24);
        let minute = *pick(rng, &DEPARTURE_MINUTES);
        midnight + Duration::days(days) + Duration::hours(hour) + Duration::minutes(minute)
    }
}

fn scale_fare(base: u32, multiplier: f64) -> u32 {
    (f64::from(base) * multiplier).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(13, 37, 12)
            .unwrap()
    }

    fn flights(seed: u64, count: usize) -> Vec<FlightRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        FlightGenerator::builtin(generated_at()).generate(&mut rng, count)
    }

    #[test]
    fn test_generates_exact_count() {
        assert_eq!(flights(1, 250).len(), 250);
        assert!(flights(1, 0).is_empty());
    }

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(9_001)]
    fn test_flight_invariants(#[case] seed: u64) {
        let catalog = ReferenceCatalog::builtin();
        for flight in flights(seed, 300) {
            assert!(flight.schedule_is_consistent(), "{flight:?}");
            assert!(flight.fares_are_ordered(), "{flight:?}");
            assert!((60..=1440).contains(&flight.duration_minutes));
            assert!((50..=400).contains(&flight.available_seats));
            assert!((200..=2000).contains(&flight.price_economy));
            assert!(catalog.airlines.contains(&flight.airline.as_str()));
            assert!(catalog.aircraft_types.contains(&flight.aircraft_type.as_str()));
            assert!(catalog.seat_configurations.contains(&flight.seat_configuration.as_str()));
            assert_eq!(flight.created_at, generated_at());
            assert_eq!(flight.updated_at, generated_at());
        }
    }

    #[test]
    fn test_fare_multipliers_stay_in_band() {
        for flight in flights(77, 500) {
            let economy = f64::from(flight.price_economy);
            assert!(f64::from(flight.price_business) >= (economy * 2.5).floor());
            assert!(f64::from(flight.price_business) <= economy * 4.0);
            assert!(f64::from(flight.price_first) >= (economy * 5.0).floor());
            assert!(f64::from(flight.price_first) <= economy * 8.0);
        }
    }

    #[test]
    fn test_departure_window_and_quarter_hours() {
        let start = generated_at().date().and_time(NaiveTime::MIN);
        for flight in flights(5, 500) {
            let departure = flight.departure_time;
            assert!(departure > generated_at());
            assert!(departure < start + Duration::days(SCHEDULE_WINDOW_DAYS + 1));
            assert!(DEPARTURE_MINUTES.contains(&i64::from(departure.minute())));
            assert_eq!(departure.second(), 0);
        }
    }

    #[test]
    fn test_origin_and_destination_countries_differ() {
        let catalog = ReferenceCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let origin = sample_place(&mut rng, catalog);
            let destination = sample_place_outside(&mut rng, catalog, origin.country);
            assert_ne!(origin.country, destination.country);
        }
    }

    #[test]
    fn test_identifier_formats() {
        let flight = flights(3, 1).remove(0);
        assert_eq!(flight.flight_id.len(), 8);
        assert!(flight.flight_id.starts_with("FL"));
        assert!(flight.flight_id[2..].chars().all(|c| c.is_ascii_digit()));

        assert_eq!(flight.flight_number.len(), 6);
        assert!(flight.flight_number[..2].chars().all(|c| c.is_ascii_uppercase()));
        assert!(flight.flight_number[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_flight_number_uses_carrier_code() {
        let catalog = ReferenceCatalog::builtin();
        for flight in flights(8, 200) {
            assert!(flight.flight_number.starts_with(catalog.carrier_code(&flight.airline)));
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        assert_eq!(flights(99, 20), flights(99, 20));
        assert_ne!(flights(99, 20), flights(100, 20));
    }

    #[test]
    fn test_scale_fare_floors() {
        assert_eq!(scale_fare(201, 2.5), 502);
        assert_eq!(scale_fare(1000, 7.9999), 7999);
    }
}
