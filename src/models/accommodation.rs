//! Accommodation rows and their enumerated columns

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

text_enum! {
    /// Kind of property
    AccommodationType {
        Hotel => "Hotel",
        Resort => "Resort",
        BoutiqueHotel => "Boutique Hotel",
        Hostel => "Hostel",
        BedAndBreakfast => "Bed & Breakfast",
        Apartment => "Apartment",
        Villa => "Villa",
        Condo => "Condo",
        Guesthouse => "Guesthouse",
        Inn => "Inn",
        Motel => "Motel",
        Lodge => "Lodge",
        Cabin => "Cabin",
        Chalet => "Chalet",
        CapsuleHotel => "Capsule Hotel",
    }
}

impl AccommodationType {
    /// Hotel-like properties are named "{prefix} {city} {suffix}"
    #[must_use]
    pub const fn is_hotel_like(self) -> bool {
        matches!(self, Self::Hotel | Self::Resort | Self::BoutiqueHotel)
    }
}

text_enum! {
    /// Refund terms on cancellation
    CancellationPolicy {
        FreeCancellation => "Free cancellation",
        NonRefundable => "Non-refundable",
        PartialRefund => "Partial refund",
    }
}

text_enum! {
    PetPolicy {
        PetFriendly => "Pet friendly",
        NoPets => "No pets allowed",
        OnRequest => "Pets on request",
    }
}

/// One row of `accommodations.csv`. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationRecord {
    pub accommodation_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub accommodation_type: AccommodationType,
    pub address: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub star_rating: u8,
    #[serde(with = "super::json_list")]
    pub amenities: Vec<String>,
    #[serde(with = "super::json_list")]
    pub room_types: Vec<String>,
    pub check_in_time: String,
    pub check_out_time: String,
    pub cancellation_policy: CancellationPolicy,
    pub pet_policy: PetPolicy,
    pub parking_available: bool,
    pub wifi_available: bool,
    pub breakfast_included: bool,
    pub gym_available: bool,
    pub pool_available: bool,
    pub spa_available: bool,
    pub business_center: bool,
    pub room_service: bool,
    pub concierge_service: bool,
    pub contact_phone: String,
    pub contact_email: String,
    #[serde(with = "super::json_list")]
    pub images: Vec<String>,
    pub description: String,
    #[serde(with = "super::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::timestamp")]
    pub updated_at: NaiveDateTime,
}

impl AccommodationRecord {
    /// One-line description used in the run summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Hotel: {} in {}, {} | Type: {} | Rating: {} stars",
            self.name, self.city, self.country, self.accommodation_type, self.star_rating
        )
    }
}
