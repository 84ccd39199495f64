//! Data models for the travelgen generator
//!
//! This module contains the record types written to CSV, organized by concern:
//! - Location: coordinates and sampled places
//! - Flight: flight rows and their enumerated columns
//! - Accommodation: accommodation rows and their enumerated columns

/// Declares a fieldless enum whose CSV/serde form is a fixed display text.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Text written to the CSV column
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod accommodation;
pub mod flight;
pub mod location;

// Re-export all public types for convenient access
pub use accommodation::{AccommodationRecord, AccommodationType, CancellationPolicy, PetPolicy};
pub use flight::{BaggageAllowance, FlightRecord, FlightStatus, Layovers, MealService};
pub use location::{GeoPoint, Place};

/// Timestamp columns as `YYYY-MM-DD HH:MM:SS`
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}

/// List columns stored as a JSON array inside a single CSV field
pub(crate) mod json_list {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    pub fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = serde_json::to_string(values).map_err(ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        serde_json::from_str(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_enum_display_matches_serde() {
        for status in FlightStatus::ALL {
            let encoded = serde_json::to_string(status).unwrap();
            assert_eq!(encoded, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_text_enum_roundtrip_from_text() {
        let layovers: Layovers = serde_json::from_str("\"3+ Stops\"").unwrap();
        assert_eq!(layovers, Layovers::ThreePlusStops);
        assert_eq!(AccommodationType::BedAndBreakfast.as_str(), "Bed & Breakfast");
    }
}
