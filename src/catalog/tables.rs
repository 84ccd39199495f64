//! Flat reference lists: carriers, aircraft, amenities and naming vocabulary

use crate::models::AccommodationType;

pub const AIRLINES: &[&str] = &[
    "American Airlines",
    "Delta Air Lines",
    "United Airlines",
    "Southwest Airlines",
    "Lufthansa",
    "British Airways",
    "Air France",
    "KLM Royal Dutch Airlines",
    "Emirates",
    "Qatar Airways",
    "Singapore Airlines",
    "Cathay Pacific",
    "Japan Airlines",
    "All Nippon Airways",
    "Korean Air",
    "Thai Airways",
    "Turkish Airlines",
    "Saudia",
    "Etihad Airways",
    "Qantas",
    "Air Canada",
    "WestJet",
    "Aeromexico",
    "LATAM Airlines",
    "Virgin Atlantic",
    "Iberia",
    "Alitalia",
    "Scandinavian Airlines",
];

/// Two-letter designators for the carriers that have one; the rest use `XX`
pub const CARRIER_CODES: &[(&str, &str)] = &[
    ("American Airlines", "AA"),
    ("Delta Air Lines", "DL"),
    ("United Airlines", "UA"),
    ("Southwest Airlines", "WN"),
    ("Lufthansa", "LH"),
    ("British Airways", "BA"),
    ("Air France", "AF"),
    ("KLM Royal Dutch Airlines", "KL"),
    ("Emirates", "EK"),
    ("Qatar Airways", "QR"),
    ("Singapore Airlines", "SQ"),
    ("Cathay Pacific", "CX"),
];

pub const UNKNOWN_CARRIER_CODE: &str = "XX";

pub const AIRCRAFT_TYPES: &[&str] = &[
    "Boeing 737",
    "Boeing 747",
    "Boeing 777",
    "Boeing 787",
    "Airbus A320",
    "Airbus A330",
    "Airbus A350",
    "Airbus A380",
    "Bombardier CRJ",
    "Embraer E-Jet",
    "ATR 72",
    "Boeing 757",
];

pub const SEAT_CONFIGURATIONS: &[&str] = &[
    "3-3", "2-4-2", "3-4-3", "2-2", "1-2-1", "2-3-2", "3-3-3", "2-2-2",
];

pub const ACCOMMODATION_TYPES: &[AccommodationType] = AccommodationType::ALL;

pub const AMENITIES: &[&str] = &[
    "WiFi",
    "Pool",
    "Gym",
    "Spa",
    "Restaurant",
    "Bar",
    "Room Service",
    "Concierge",
    "Business Center",
    "Parking",
    "Pet Friendly",
    "Airport Shuttle",
    "Laundry Service",
    "Dry Cleaning",
    "24/7 Front Desk",
    "Elevator",
    "Fitness Center",
    "Tennis Court",
    "Golf Course",
    "Beach Access",
];

pub const ROOM_TYPES: &[&str] = &[
    "Standard Room",
    "Deluxe Room",
    "Suite",
    "Presidential Suite",
    "Ocean View Room",
    "City View Room",
    "Garden View Room",
    "Pool View Room",
    "Family Room",
    "Twin Room",
    "Double Room",
    "Single Room",
    "Studio",
    "Penthouse",
    "Villa",
    "Cabin",
];

pub const NAME_PREFIXES: &[&str] = &[
    "Grand", "Royal", "Plaza", "Palace", "Resort", "Inn", "Lodge", "Villa",
];

pub const NAME_SUFFIXES: &[&str] = &["Hotel", "Resort", "Suites", "Inn", "Lodge", "Villa", "Palace"];

pub const STREET_NAMES: &[&str] = &[
    "Main St",
    "Broadway",
    "First Ave",
    "Park Ave",
    "Oak St",
    "Pine St",
    "Elm St",
];

pub const CHECK_IN_TIMES: &[&str] = &["14:00", "15:00", "16:00"];

pub const CHECK_OUT_TIMES: &[&str] = &["11:00", "12:00", "13:00"];
