//! Data transfer objects for web requests and responses.
//!
//! The JSON field names use camelCase, matching the shape consumed by the
//! existing schedule viewer clients.

use serde::{Deserialize, Serialize};

use crate::parser::{Flight, Layover, Pairing, ParseOutcome};

/// Query parameters for the parse endpoint.
#[derive(Debug, Deserialize)]
pub struct ParseQuery {
    /// Stop after this many completed pairings.
    pub limit: Option<usize>,
}

/// Response for the parse endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    /// Completed pairings, in document order.
    pub pairings: Vec<PairingDto>,

    /// Human-readable parse warnings.
    pub warnings: Vec<String>,
}

impl ParseResponse {
    pub fn from_outcome(outcome: &ParseOutcome) -> Self {
        Self {
            pairings: outcome.pairings.iter().map(PairingDto::from_record).collect(),
            warnings: outcome.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// One pairing in a parse response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairingDto {
    pub pairing_number: String,
    pub operating_dates: String,
    pub flights: Vec<FlightDto>,
    pub layovers: u32,
    pub block_time: String,
    pub tafb: String,
    pub total_allowance: String,
}

impl PairingDto {
    fn from_record(pairing: &Pairing) -> Self {
        Self {
            pairing_number: pairing.pairing_number.clone(),
            operating_dates: pairing.operating_dates.clone(),
            flights: pairing.flights.iter().map(FlightDto::from_record).collect(),
            layovers: pairing.layovers,
            block_time: pairing.block_time.clone(),
            tafb: pairing.tafb.clone(),
            total_allowance: pairing.total_allowance.clone(),
        }
    }
}

/// One flight leg in a parse response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    pub aircraft: String,
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub flight_time: String,
    pub duty_time: Option<String>,
    pub days_of_week: Vec<u8>,
    pub has_layover: bool,
    pub layover: Option<LayoverDto>,
}

impl FlightDto {
    fn from_record(flight: &Flight) -> Self {
        Self {
            aircraft: flight.aircraft.clone(),
            flight_number: flight.flight_number.clone(),
            departure: flight.departure.to_string(),
            arrival: flight.arrival.to_string(),
            departure_time: flight.departure_time.to_string(),
            arrival_time: flight.arrival_time.to_string(),
            flight_time: flight.flight_time.clone(),
            duty_time: flight.duty_time.clone(),
            days_of_week: flight.days_of_week.iter().map(|d| d.number()).collect(),
            has_layover: flight.has_layover,
            layover: flight.layover.as_ref().map(LayoverDto::from_record),
        }
    }
}

/// A layover in a parse response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoverDto {
    pub hotel: String,
    pub duration: String,
}

impl LayoverDto {
    fn from_record(layover: &Layover) -> Self {
        Self {
            hotel: layover.hotel.clone(),
            duration: layover.duration.clone(),
        }
    }
}

/// One published document in the file listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// File name within the data directory.
    pub name: String,

    /// Size in bytes.
    pub size: u64,

    /// Last-modified timestamp, RFC 3339.
    pub last_modified: String,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pairing_file;

    #[test]
    fn response_mirrors_the_records() {
        let lines = [
            "H1",
            "H2",
            "H3",
            "...OPERATES/OPER- T5001 ... 15APR - 25APR",
            "15 A320 100 YYZ 0815 YUL 1015 200 500 2519",
            "  Le Centre Sheraton Montreal Ho  ",
            "=END",
        ];
        let outcome = parse_pairing_file(&lines, None);
        let response = ParseResponse::from_outcome(&outcome);

        assert_eq!(response.pairings.len(), 1);
        let p = &response.pairings[0];
        assert_eq!(p.pairing_number, "T5001");
        assert_eq!(p.layovers, 1);

        let f = &p.flights[0];
        assert_eq!(f.departure, "YYZ");
        assert_eq!(f.departure_time, "0815");
        assert_eq!(f.days_of_week, vec![1, 5]);
        assert_eq!(f.layover.as_ref().unwrap().hotel, "Le Centre Sheraton Montreal Ho");
    }

    #[test]
    fn json_field_names_are_camel_case() {
        let lines = [
            "H1",
            "H2",
            "H3",
            "...OPERATES/OPER- T5001 ... 15APR - 25APR",
            "1 A320 100 YYZ 0815 BGI 1315 500",
            "=END",
        ];
        let outcome = parse_pairing_file(&lines, None);
        let json = serde_json::to_string(&ParseResponse::from_outcome(&outcome)).unwrap();

        assert!(json.contains("\"pairingNumber\":\"T5001\""));
        assert!(json.contains("\"operatingDates\":\"15APR - 25APR\""));
        assert!(json.contains("\"daysOfWeek\":[1]"));
        assert!(json.contains("\"hasLayover\":false"));
    }
}
