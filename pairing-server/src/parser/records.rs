//! Parsed pairing records.
//!
//! These are the output of the parser: one `Pairing` per boundary-terminated
//! block in the document, each holding its flight legs in document order.
//! Once a pairing has been emitted it is never mutated again.

use crate::domain::{ClockTime, Iata, Weekday};

/// A rest period between legs, spent at a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layover {
    /// Hotel name. Empty until the hotel line following the flight line
    /// has been seen; filled at most once.
    pub hotel: String,

    /// Layover duration as printed (e.g. "2519" for 25h19m).
    pub duration: String,
}

/// One scheduled flight leg within a pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Aircraft type token (e.g. "A320").
    pub aircraft: String,

    /// Flight number digits as printed.
    pub flight_number: String,

    /// Departure airport.
    pub departure: Iata,

    /// Arrival airport.
    pub arrival: Iata,

    /// Departure time, local.
    pub departure_time: ClockTime,

    /// Arrival time, local.
    pub arrival_time: ClockTime,

    /// Flight time as printed (e.g. "500" for 5h00m).
    pub flight_time: String,

    /// Duty time as printed, when the column is present.
    pub duty_time: Option<String>,

    /// Which weekdays the leg operates, from the leading digit mask.
    pub days_of_week: Vec<Weekday>,

    /// Whether this leg is followed by a hotel layover.
    pub has_layover: bool,

    /// The layover record; present if and only if `has_layover`.
    pub layover: Option<Layover>,
}

/// One trip block: a multi-day crew pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Pairing identifier (e.g. "T5001"). Empty if the block never
    /// carried an identifier line.
    pub pairing_number: String,

    /// Operating date range as printed (e.g. "15APR - 25APR").
    pub operating_dates: String,

    /// Flight legs in document order.
    pub flights: Vec<Flight>,

    /// Number of legs with a layover. Always equals
    /// `flights.iter().filter(|f| f.has_layover).count()`.
    pub layovers: u32,

    /// Aggregate block hours for the pairing.
    pub block_time: String,

    /// Time away from base.
    pub tafb: String,

    /// Total allowance amount.
    pub total_allowance: String,
}
