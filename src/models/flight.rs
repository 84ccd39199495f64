//! Flight rows and their enumerated columns

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

text_enum! {
    /// In-flight catering offered on the route
    MealService {
        FullMeal => "Full Meal",
        Snack => "Snack",
        NoMeal => "No Meal",
        SpecialDiet => "Special Diet",
    }
}

text_enum! {
    /// Checked baggage included in the fare
    BaggageAllowance {
        Kg23 => "23kg",
        Kg32 => "32kg",
        NoBaggage => "No Baggage",
        ExtraBaggage => "Extra Baggage",
    }
}

text_enum! {
    /// Number of intermediate stops
    Layovers {
        Direct => "Direct",
        OneStop => "1 Stop",
        TwoStops => "2 Stops",
        ThreePlusStops => "3+ Stops",
    }
}

text_enum! {
    /// Operational status shown on the departures board
    FlightStatus {
        Scheduled => "Scheduled",
        OnTime => "On Time",
        Delayed => "Delayed",
        Cancelled => "Cancelled",
        Boarding => "Boarding",
    }
}

/// One row of `flights.csv`. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    pub flight_number: String,
    pub airline: String,
    pub aircraft_type: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[serde(with = "super::timestamp")]
    pub departure_time: NaiveDateTime,
    #[serde(with = "super::timestamp")]
    pub arrival_time: NaiveDateTime,
    pub duration_minutes: u32,
    pub available_seats: u32,
    pub seat_configuration: String,
    pub price_economy: u32,
    pub price_business: u32,
    pub price_first: u32,
    pub meal_service: MealService,
    pub baggage_allowance: BaggageAllowance,
    pub layovers: Layovers,
    pub status: FlightStatus,
    #[serde(with = "super::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::timestamp")]
    pub updated_at: NaiveDateTime,
}

impl FlightRecord {
    /// Scheduled flight time
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Arrival equals departure plus duration, to the minute
    #[must_use]
    pub fn schedule_is_consistent(&self) -> bool {
        self.departure_time + self.duration() == self.arrival_time
    }

    /// Economy < business < first
    #[must_use]
    pub fn fares_are_ordered(&self) -> bool {
        self.price_economy < self.price_business && self.price_business < self.price_first
    }

    /// One-line description used in the run summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Flight: {} from {} to {} | Airline: {} | Price: ${}",
            self.flight_number,
            self.departure_airport,
            self.arrival_airport,
            self.airline,
            self.price_economy
        )
    }
}
