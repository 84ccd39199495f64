//! Reference catalog
//!
//! The fixed lookup tables every generated record is assembled from:
//! - Geography: countries, states, cities, airport codes, city reference points
//! - Flights: airlines and their carrier codes, aircraft, seat layouts
//! - Accommodations: property types, amenities, room types, naming vocabulary
//!
//! The built-in catalog is a `static` value; generators borrow it.

pub mod geography;
pub mod tables;

use std::ops::RangeInclusive;

use tracing::debug;

use crate::models::{AccommodationType, GeoPoint, Place};
use crate::{Result, TravelGenError};

pub use geography::{COUNTRIES, Country, State};

/// Number of amenities sampled per accommodation
pub const AMENITY_SAMPLE_SIZE: RangeInclusive<usize> = 5..=15;
/// Number of room types sampled per accommodation
pub const ROOM_TYPE_SAMPLE_SIZE: RangeInclusive<usize> = 3..=8;

/// Read-only lookup tables used to parameterize generation
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    pub airlines: &'static [&'static str],
    pub carrier_codes: &'static [(&'static str, &'static str)],
    pub aircraft_types: &'static [&'static str],
    pub seat_configurations: &'static [&'static str],
    pub countries: &'static [Country],
    pub accommodation_types: &'static [AccommodationType],
    pub amenities: &'static [&'static str],
    pub room_types: &'static [&'static str],
    pub name_prefixes: &'static [&'static str],
    pub name_suffixes: &'static [&'static str],
    pub street_names: &'static [&'static str],
    pub check_in_times: &'static [&'static str],
    pub check_out_times: &'static [&'static str],
}

static BUILTIN: ReferenceCatalog = ReferenceCatalog {
    airlines: tables::AIRLINES,
    carrier_codes: tables::CARRIER_CODES,
    aircraft_types: tables::AIRCRAFT_TYPES,
    seat_configurations: tables::SEAT_CONFIGURATIONS,
    countries: COUNTRIES,
    accommodation_types: tables::ACCOMMODATION_TYPES,
    amenities: tables::AMENITIES,
    room_types: tables::ROOM_TYPES,
    name_prefixes: tables::NAME_PREFIXES,
    name_suffixes: tables::NAME_SUFFIXES,
    street_names: tables::STREET_NAMES,
    check_in_times: tables::CHECK_IN_TIMES,
    check_out_times: tables::CHECK_OUT_TIMES,
};

impl ReferenceCatalog {
    /// The catalog compiled into the binary
    #[must_use]
    pub fn builtin() -> &'static ReferenceCatalog {
        &BUILTIN
    }

    /// Look up a country by name
    #[must_use]
    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.name == name)
    }

    /// Airport code for a city.
    ///
    /// Cities without a mapped airport fall back to the first three characters
    /// of the city name, uppercased.
    #[must_use]
    pub fn airport_code(&self, country: &str, city: &str) -> String {
        match self.country(country).and_then(|c| c.airport(city)) {
            Some(code) => code.to_string(),
            None => city.chars().take(3).collect::<String>().to_uppercase(),
        }
    }

    /// Reference point for a city, if the catalog knows one
    #[must_use]
    pub fn city_coordinates(&self, country: &str, city: &str) -> Option<GeoPoint> {
        self.country(country).and_then(|c| c.landmark(city))
    }

    /// Two-letter carrier code, `XX` for airlines without one
    #[must_use]
    pub fn carrier_code(&self, airline: &str) -> &'static str {
        self.carrier_codes
            .iter()
            .find(|(name, _)| *name == airline)
            .map_or(tables::UNKNOWN_CARRIER_CODE, |(_, code)| *code)
    }

    /// Whether `place` names a city listed under its country and state
    #[must_use]
    pub fn contains(&self, place: &Place) -> bool {
        self.country(place.country)
            .and_then(|country| country.state(place.state))
            .is_some_and(|state| state.cities.contains(&place.city))
    }

    /// Check that every table the generators sample from can support it
    pub fn validate(&self) -> Result<()> {
        let lists: [(&str, usize); 11] = [
            ("airlines", self.airlines.len()),
            ("aircraft types", self.aircraft_types.len()),
            ("seat configurations", self.seat_configurations.len()),
            ("accommodation types", self.accommodation_types.len()),
            ("amenities", self.amenities.len()),
            ("room types", self.room_types.len()),
            ("name prefixes", self.name_prefixes.len()),
            ("name suffixes", self.name_suffixes.len()),
            ("street names", self.street_names.len()),
            ("check-in times", self.check_in_times.len()),
            ("check-out times", self.check_out_times.len()),
        ];
        for (label, len) in lists {
            if len == 0 {
                return Err(TravelGenError::catalog(format!("{label} table is empty")));
            }
        }

        if self.countries.len() < 2 {
            return Err(TravelGenError::catalog(
                "at least two countries are needed to pair flight origins with destinations",
            ));
        }

        for country in self.countries {
            if country.states.is_empty() {
                return Err(TravelGenError::catalog(format!(
                    "country '{}' has no states",
                    country.name
                )));
            }
            if let Some(state) = country.states.iter().find(|s| s.cities.is_empty()) {
                return Err(TravelGenError::catalog(format!(
                    "state '{}' in '{}' has no cities",
                    state.name, country.name
                )));
            }
        }

        if self.amenities.len() < *AMENITY_SAMPLE_SIZE.end() {
            return Err(TravelGenError::catalog(format!(
                "{} amenities cannot supply samples of up to {}",
                self.amenities.len(),
                AMENITY_SAMPLE_SIZE.end()
            )));
        }

        if self.room_types.len() < *ROOM_TYPE_SAMPLE_SIZE.end() {
            return Err(TravelGenError::catalog(format!(
                "{} room types cannot supply samples of up to {}",
                self.room_types.len(),
                ROOM_TYPE_SAMPLE_SIZE.end()
            )));
        }

        debug!(
            countries = self.countries.len(),
            airlines = self.airlines.len(),
            amenities = self.amenities.len(),
            "Reference catalog validated"
        );
        Ok(())
    }
}
