//! Flight-leg line parsing.

use crate::domain::{ClockTime, Iata, parse_weekday_mask};

use super::accumulator::PairingBuilder;
use super::patterns::FLIGHT;
use super::records::{Flight, Layover};
use super::warning::ParseWarning;

/// Try to read one flight leg from `line`.
///
/// Returns `true` when the line matched the flight pattern (and is
/// therefore consumed), whether or not a record was appended. A matching
/// line whose captured fields fail validation produces `MalformedField`
/// warnings and appends nothing; handing a flight with a garbled weekday
/// mask or an impossible clock time downstream would be worse than
/// dropping the leg.
pub(super) fn parse_flight_line(
    line: &str,
    builder: &mut PairingBuilder,
    emitted: usize,
    warnings: &mut Vec<ParseWarning>,
) -> bool {
    let Some(caps) = FLIGHT.captures(line) else {
        return false;
    };

    // The pairing label is only needed on the malformed paths, so it is
    // built inside the closure rather than for every flight line.
    let mut malformed = |field: &'static str, value: &str| {
        warnings.push(ParseWarning::MalformedField {
            pairing: builder.label(emitted),
            field,
            value: value.to_string(),
        });
    };

    let mask = &caps[1];
    let days_of_week = match parse_weekday_mask(mask) {
        Ok(days) => days,
        Err(_) => {
            malformed("weekday mask", mask);
            return true;
        }
    };

    let departure = match caps[4].parse::<Iata>() {
        Ok(code) => code,
        Err(_) => {
            malformed("departure code", &caps[4]);
            return true;
        }
    };

    let arrival = match caps[6].parse::<Iata>() {
        Ok(code) => code,
        Err(_) => {
            malformed("arrival code", &caps[6]);
            return true;
        }
    };

    let departure_time = match ClockTime::parse(&caps[5]) {
        Ok(time) => time,
        Err(_) => {
            malformed("departure time", &caps[5]);
            return true;
        }
    };

    let arrival_time = match ClockTime::parse(&caps[7]) {
        Ok(time) => time,
        Err(_) => {
            malformed("arrival time", &caps[7]);
            return true;
        }
    };

    let layover_duration = caps.get(10).map(|m| m.as_str());

    builder.push_flight(Flight {
        aircraft: caps[2].to_string(),
        flight_number: caps[3].to_string(),
        departure,
        arrival,
        departure_time,
        arrival_time,
        flight_time: caps[8].to_string(),
        duty_time: caps.get(9).map(|m| m.as_str().to_string()),
        days_of_week,
        has_layover: layover_duration.is_some(),
        layover: layover_duration.map(|duration| Layover {
            hotel: String::new(),
            duration: duration.to_string(),
        }),
    });

    true
}
