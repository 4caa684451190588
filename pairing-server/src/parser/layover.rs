//! Hotel-name association.
//!
//! The hotel for a layover is printed on its own line somewhere after the
//! flight line, aligned into a column (two or more spaces on each side).
//! Only the most recently parsed leg is ever a candidate target, and only
//! while its layover's hotel is still empty.

use tracing::debug;

use super::accumulator::PairingBuilder;
use super::patterns::LAYOVER_HOTEL;

/// Try to read a hotel name from `line` and attach it to the pending
/// layover of the most recent flight.
///
/// Returns `true` when the line matched the hotel pattern. A match does
/// not imply a state change: with no pending layover the line is consumed
/// as a no-op. Whether such a line belongs to an earlier leg or is stray
/// column noise cannot be decided from the text alone, so the ambiguous
/// cases are logged rather than guessed at.
pub(super) fn attach_layover_hotel(line: &str, builder: &mut PairingBuilder) -> bool {
    let Some(caps) = LAYOVER_HOTEL.captures(line) else {
        return false;
    };
    let hotel = caps[1].trim();

    match builder.last_flight_mut().and_then(|f| f.layover.as_mut()) {
        Some(layover) if layover.hotel.is_empty() => {
            layover.hotel = hotel.to_string();
        }
        Some(layover) => {
            debug!(
                hotel,
                existing = %layover.hotel,
                "hotel line matched but the pending layover is already named; keeping the first"
            );
        }
        None => {
            debug!(hotel, "hotel line matched with no layover pending; ignoring");
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::flight::parse_flight_line;

    fn builder_with_leg(line: &str) -> PairingBuilder {
        let mut builder = PairingBuilder::new();
        let mut warnings = Vec::new();
        assert!(parse_flight_line(line, &mut builder, 0, &mut warnings));
        assert!(warnings.is_empty());
        builder
    }

    #[test]
    fn attaches_to_pending_layover() {
        let mut builder = builder_with_leg("1 A320 100 YYZ 0815 YUL 1015 200 500 2519");

        assert!(attach_layover_hotel(
            "  Le Centre Sheraton Montreal Ho  ",
            &mut builder
        ));

        let pairing = builder.finish();
        let layover = pairing.flights[0].layover.as_ref().unwrap();
        assert_eq!(layover.hotel, "Le Centre Sheraton Montreal Ho");
        assert_eq!(layover.duration, "2519");
    }

    #[test]
    fn match_without_pending_layover_is_a_consumed_noop() {
        let mut builder = builder_with_leg("1 A320 100 YYZ 0815 BGI 1315 500");

        assert!(attach_layover_hotel("  Some Hotel Name  ", &mut builder));

        let pairing = builder.finish();
        assert!(pairing.flights[0].layover.is_none());
    }

    #[test]
    fn second_hotel_line_does_not_overwrite() {
        let mut builder = builder_with_leg("1 A320 100 YYZ 0815 YUL 1015 200 500 2519");

        assert!(attach_layover_hotel("  First Hotel  ", &mut builder));
        assert!(attach_layover_hotel("  Second Hotel  ", &mut builder));

        let pairing = builder.finish();
        let layover = pairing.flights[0].layover.as_ref().unwrap();
        assert_eq!(layover.hotel, "First Hotel");
    }

    #[test]
    fn accented_hotel_name_falls_through_unmatched() {
        // The print-out is ASCII; a line with accented text is not a hotel
        // column and must not be consumed or attached.
        let mut builder = builder_with_leg("1 A320 100 YYZ 0815 YUL 1015 200 500 2519");

        assert!(!attach_layover_hotel("  Hôtel Le Germain  ", &mut builder));

        let pairing = builder.finish();
        assert_eq!(pairing.flights[0].layover.as_ref().unwrap().hotel, "");
    }

    #[test]
    fn no_match_without_double_space_margins() {
        let mut builder = builder_with_leg("1 A320 100 YYZ 0815 YUL 1015 200 500 2519");
        assert!(!attach_layover_hotel(" Tight Margins ", &mut builder));
    }

    #[test]
    fn empty_builder_consumes_without_panic() {
        let mut builder = PairingBuilder::new();
        assert!(attach_layover_hotel("  Some Hotel  ", &mut builder));
    }
}
