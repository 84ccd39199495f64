//! Record generators
//!
//! Both generators borrow a validated [`ReferenceCatalog`] and draw every
//! random choice from a caller-supplied RNG, so a seeded RNG and a fixed
//! generation time reproduce a batch exactly.

pub mod accommodations;
pub mod flights;

use std::ops::RangeInclusive;

use chrono::{Local, NaiveDateTime, Timelike};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

use crate::catalog::{Country, ReferenceCatalog};
use crate::models::{AccommodationRecord, FlightRecord, Place};

pub use accommodations::AccommodationGenerator;
pub use flights::FlightGenerator;

/// Generate `count` flights from the built-in catalog, stamped with the current local time
pub fn generate_flights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FlightRecord> {
    FlightGenerator::builtin(now()).generate(rng, count)
}

/// Generate `count` accommodations from the built-in catalog, stamped with the current local time
pub fn generate_accommodations<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Vec<AccommodationRecord> {
    AccommodationGenerator::builtin(now()).generate(rng, count)
}

/// Local wall-clock time truncated to whole seconds
#[must_use]
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Uniform pick from a table that `ReferenceCatalog::validate` guarantees non-empty
pub(crate) fn pick<'t, T, R: Rng + ?Sized>(rng: &mut R, items: &'t [T]) -> &'t T {
    &items[rng.random_range(0..items.len())]
}

/// Country, then state within it, then city within that state
pub(crate) fn sample_place<R: Rng + ?Sized>(rng: &mut R, catalog: &ReferenceCatalog) -> Place {
    let country = pick(rng, catalog.countries);
    place_in(rng, country)
}

/// Like [`sample_place`], but never in `excluded_country`
pub(crate) fn sample_place_outside<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &ReferenceCatalog,
    excluded_country: &str,
) -> Place {
    let candidates: Vec<&'static Country> = catalog
        .countries
        .iter()
        .filter(|country| country.name != excluded_country)
        .collect();
    let country = *pick(rng, &candidates);
    place_in(rng, country)
}

fn place_in<R: Rng + ?Sized>(rng: &mut R, country: &'static Country) -> Place {
    let state = pick(rng, country.states);
    let city = pick(rng, state.cities);
    Place {
        country: country.name,
        state: state.name,
        city,
    }
}

/// Shuffle-and-slice sample without replacement, sized uniformly from `size`
pub(crate) fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'static str],
    size: RangeInclusive<usize>,
) -> Vec<String> {
    let amount = rng.random_range(size).min(pool.len());
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .take(amount)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_place_is_in_catalog() {
        let catalog = ReferenceCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let place = sample_place(&mut rng, catalog);
            assert!(catalog.contains(&place), "{place:?}");
        }
    }

    #[test]
    fn test_sample_place_outside_excludes_country() {
        let catalog = ReferenceCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let place = sample_place_outside(&mut rng, catalog, "Japan");
            assert_ne!(place.country, "Japan");
            assert!(catalog.contains(&place));
        }
    }

    #[test]
    fn test_sample_distinct_has_no_duplicates() {
        let pool = ["a", "b", "c", "d", "e", "f"];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let sample = sample_distinct(&mut rng, &pool, 2..=4);
            assert!((2..=4).contains(&sample.len()));
            let unique: HashSet<_> = sample.iter().collect();
            assert_eq!(unique.len(), sample.len());
            assert!(sample.iter().all(|item| pool.contains(&item.as_str())));
        }
    }

    #[test]
    fn test_sample_distinct_caps_at_pool_size() {
        let pool = ["a", "b"];
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(sample_distinct(&mut rng, &pool, 4..=4).len(), 2);
    }

    #[test]
    fn test_now_has_whole_seconds() {
        assert_eq!(now().nanosecond(), 0);
    }

    #[test]
    fn test_convenience_generators() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_flights(&mut rng, 3).len(), 3);
        assert!(generate_accommodations(&mut rng, 0).is_empty());
    }
}
