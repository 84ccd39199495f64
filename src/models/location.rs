//! Location model for sampled places and geographic coordinates

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Round both axes to `precision` decimal places
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Self {
        let multiplier = 10_f64.powi(i32::try_from(precision).unwrap_or(6));
        Self {
            latitude: (self.latitude * multiplier).round() / multiplier,
            longitude: (self.longitude * multiplier).round() / multiplier,
        }
    }

    /// Clamp into the valid latitude/longitude ranges
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude: self.longitude.clamp(-180.0, 180.0),
        }
    }

    /// Whether the point lies within [-90, 90] x [-180, 180]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A country/state/city triple drawn from the reference catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place {
    pub country: &'static str,
    pub state: &'static str,
    pub city: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_coordinates() {
        let point = GeoPoint::new(46.818_234_56, 8.227_456_78);
        let rounded = point.rounded(6);
        assert_eq!(rounded.latitude, 46.818_235);
        assert_eq!(rounded.longitude, 8.227_457);

        let coarse = point.rounded(2);
        assert_eq!(coarse.latitude, 46.82);
        assert_eq!(coarse.longitude, 8.23);
    }

    #[test]
    fn test_clamped_and_validity() {
        let point = GeoPoint::new(90.05, -180.2);
        assert!(!point.is_valid());

        let clamped = point.clamped();
        assert!(clamped.is_valid());
        assert_eq!(clamped.latitude, 90.0);
        assert_eq!(clamped.longitude, -180.0);
    }

    #[test]
    fn test_format_coordinates() {
        let point = GeoPoint::new(51.5074, -0.1278);
        assert_eq!(point.format_coordinates(), "51.5074, -0.1278");
    }
}
