//! Accommodation record generation

use chrono::NaiveDateTime;
use rand::{Rng, RngExt};
use tracing::debug;

use super::{pick, sample_distinct, sample_place};
use crate::Result;
use crate::catalog::{AMENITY_SAMPLE_SIZE, ROOM_TYPE_SAMPLE_SIZE, ReferenceCatalog};
use crate::models::{
    AccommodationRecord, AccommodationType, CancellationPolicy, GeoPoint, PetPolicy, Place,
};

/// Maximum offset, in degrees, applied to a city reference point
pub const COORDINATE_JITTER: f64 = 0.1;
const COORDINATE_PRECISION: u32 = 6;
const MAX_IMAGES: usize = 7;

/// Builds accommodation rows from a reference catalog
#[derive(Debug, Clone)]
pub struct AccommodationGenerator<'c> {
    catalog: &'c ReferenceCatalog,
    generated_at: NaiveDateTime,
}

impl AccommodationGenerator<'static> {
    /// Generator over the built-in catalog
    #[must_use]
    pub fn builtin(generated_at: NaiveDateTime) -> Self {
        Self {
            catalog: ReferenceCatalog::builtin(),
            generated_at,
        }
    }
}

impl<'c> AccommodationGenerator<'c> {
    /// Generator over a custom catalog, rejected if it cannot support sampling
    pub fn new(catalog: &'c ReferenceCatalog, generated_at: NaiveDateTime) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog,
            generated_at,
        })
    }

    /// Generate exactly `count` accommodations
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<AccommodationRecord> {
        let accommodations: Vec<AccommodationRecord> =
            (0..count).map(|_| self.generate_one(rng)).collect();
        debug!(count = accommodations.len(), "Generated accommodations");
        accommodations
    }

    /// Generate a single accommodation
    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> AccommodationRecord {
        let place = sample_place(rng, self.catalog);
        let accommodation_type = *pick(rng, self.catalog.accommodation_types);
        let name = self.display_name(rng, accommodation_type, place.city);
        let address = format!(
            "{} {}, {}",
            rng.random_range(1..=9999),
            pick(rng, self.catalog.street_names),
            place.city
        );
        let coordinates = self.coordinates(rng, &place);

        let amenities = sample_distinct(rng, self.catalog.amenities, AMENITY_SAMPLE_SIZE);
        let room_types = sample_distinct(rng, self.catalog.room_types, ROOM_TYPE_SAMPLE_SIZE);
        let star_rating: u8 = rng.random_range(1..=5);

        let contact_phone = format!(
            "+{}-{}-{}-{}",
            rng.random_range(1..=99),
            rng.random_range(100..=999),
            rng.random_range(100..=999),
            rng.random_range(1000..=9999)
        );
        let contact_email = format!("info@{}.com", name.to_lowercase().replace(' ', ""));
        let images = image_urls(&name, rng.random_range(1..=MAX_IMAGES));
        let description = describe(rng.random_range(0..5), &name, place.city);

        AccommodationRecord {
            accommodation_id: format!("ACC{}", rng.random_range(100_000..=999_999)),
            name,
            accommodation_type,
            address,
            city: place.city.to_string(),
            country: place.country.to_string(),
            postal_code: rng.random_range(10_000..=99_999).to_string(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            star_rating,
            amenities,
            room_types,
            check_in_time: pick(rng, self.catalog.check_in_times).to_string(),
            check_out_time: pick(rng, self.catalog.check_out_times).to_string(),
            cancellation_policy: *pick(rng, CancellationPolicy::ALL),
            pet_policy: *pick(rng, PetPolicy::ALL),
            parking_available: rng.random_bool(0.5),
            wifi_available: rng.random_bool(0.5),
            breakfast_included: rng.random_bool(0.5),
            gym_available: rng.random_bool(0.5),
            pool_available: rng.random_bool(0.5),
            spa_available: rng.random_bool(0.5),
            business_center: rng.random_bool(0.5),
            room_service: rng.random_bool(0.5),
            concierge_service: rng.random_bool(0.5),
            contact_phone,
            contact_email,
            images,
            description,
            created_at: self.generated_at,
            updated_at: self.generated_at,
        }
    }

    fn display_name<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        accommodation_type: AccommodationType,
        city: &str,
    ) -> String {
        let prefix = pick(rng, self.catalog.name_prefixes);
        if accommodation_type.is_hotel_like() {
            let suffix = pick(rng, self.catalog.name_suffixes);
            format!("{prefix} {city} {suffix}")
        } else {
            format!("{prefix} {accommodation_type} {city}")
        }
    }

    /// Jittered reference point when the catalog has one, otherwise a random
    /// point between 60°S and 70°N
    fn coordinates<R: Rng + ?Sized>(&self, rng: &mut R, place: &Place) -> GeoPoint {
        match self.catalog.city_coordinates(place.country, place.city) {
            Some(reference) => GeoPoint::new(
                reference.latitude + rng.random_range(-COORDINATE_JITTER..=COORDINATE_JITTER),
                reference.longitude + rng.random_range(-COORDINATE_JITTER..=COORDINATE_JITTER),
            )
            .clamped()
            .rounded(COORDINATE_PRECISION),
            None => GeoPoint::new(
                rng.random_range(-60.0..=70.0),
                rng.random_range(-180.0..=180.0),
            )
            .rounded(COORDINATE_PRECISION),
        }
    }
}

fn image_urls(name: &str, count: usize) -> Vec<String> {
    let slug = name.to_lowercase().replace(' ', "_");
    (1..=count)
        .map(|index| format!("https://example.com/images/{slug}_{index}.jpg"))
        .collect()
}

fn describe(template: usize, name: &str, city: &str) -> String {
    match template {
        0 => format!("Experience luxury and comfort at {name}, located in the heart of {city}."),
        1 => format!(
            "Discover the perfect blend of modern amenities and traditional hospitality at {name}."
        ),
        2 => format!("Your gateway to {city}, {name} offers exceptional service and stunning views."),
        3 => format!("Relax and unwind at {name}, where every detail is designed for your comfort."),
        _ => format!(
            "Immerse yourself in the culture of {city} while enjoying world-class facilities at {name}."
        ),
    }
}
