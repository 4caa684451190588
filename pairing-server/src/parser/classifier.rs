//! Line classification.
//!
//! Each non-blank, non-boundary line is offered to a fixed sequence of
//! rule tiers, stopping at the first tier that consumes it. Within a tier
//! every predicate is evaluated against the line: the predicates are
//! single-purpose and idempotent, so two fields printed on the same line
//! (the pairing number and the date range share one line) can both be
//! captured from a single pass.
//!
//! The totals tiers assume the document never prints two different totals
//! on one line; the predicates would cope if it did, but the assumption
//! matches every document seen so far and is kept deliberately.

use super::accumulator::PairingBuilder;
use super::flight::parse_flight_line;
use super::layover::attach_layover_hotel;
use super::patterns::{
    ALLOWANCE, ALLOWANCE_MARKER, BLOCK_TIME, BLOCK_TIME_MARKER, OPERATES_MARKER, OPERATING_DATES,
    PAIRING_NUMBER, TAFB, TAFB_MARKER, TOTAL_FLIGHT_TIME, TOTAL_MARKER,
};
use super::warning::ParseWarning;

/// A line whose first character is `=` ends the current pairing block.
pub(super) fn is_pairing_boundary(line: &str) -> bool {
    line.starts_with('=')
}

/// Offer one line to the rule tiers in priority order.
///
/// Lines matching no rule are skipped silently; that is the normal fate of
/// most lines in a pairing file.
pub(super) fn classify_line(
    line: &str,
    builder: &mut PairingBuilder,
    emitted: usize,
    warnings: &mut Vec<ParseWarning>,
) {
    if pairing_header_tier(line, builder) {
        return;
    }
    if parse_flight_line(line, builder, emitted, warnings) {
        return;
    }
    if block_and_allowance_tier(line, builder, emitted, warnings) {
        return;
    }
    if tafb_and_total_tier(line, builder) {
        return;
    }
    attach_layover_hotel(line, builder);
}

/// Tier 1: the header line carrying the pairing number and date range,
/// both gated on the same marker token.
fn pairing_header_tier(line: &str, builder: &mut PairingBuilder) -> bool {
    if !line.contains(OPERATES_MARKER) {
        return false;
    }

    let mut consumed = false;
    if let Some(m) = OPERATING_DATES.find(line) {
        consumed |= builder.set_operating_dates(m.as_str());
    }
    if let Some(m) = PAIRING_NUMBER.find(line) {
        consumed |= builder.set_pairing_number(m.as_str());
    }
    consumed
}

/// Tier 3: block hours and the allowance amount, each behind its own
/// marker token.
fn block_and_allowance_tier(
    line: &str,
    builder: &mut PairingBuilder,
    emitted: usize,
    warnings: &mut Vec<ParseWarning>,
) -> bool {
    let mut consumed = false;

    if line.contains(BLOCK_TIME_MARKER) {
        if let Some(caps) = BLOCK_TIME.captures(line) {
            consumed |= builder.set_block_time(&caps[1]);
        }
    }

    if line.contains(ALLOWANCE_MARKER) {
        if let Some(caps) = ALLOWANCE.captures(line) {
            let amount = &caps[1];
            if amount.parse::<f64>().is_ok() {
                consumed |= builder.set_total_allowance(amount);
            } else if !builder.has_total_allowance() {
                // The pattern tolerates a garbled decimal separator; report
                // it instead of storing a non-numeric amount.
                warnings.push(ParseWarning::MalformedField {
                    pairing: builder.label(emitted),
                    field: "total allowance",
                    value: amount.to_string(),
                });
                consumed = true;
            }
        }
    }

    consumed
}

/// Tier 4: TAFB and the flight-hours total. The totals line has no
/// dedicated field of its own; it backfills the allowance when the
/// allowance line was absent, matching the source document's layout.
fn tafb_and_total_tier(line: &str, builder: &mut PairingBuilder) -> bool {
    let mut consumed = false;

    if line.contains(TAFB_MARKER) {
        if let Some(caps) = TAFB.captures(line) {
            consumed |= builder.set_tafb(&caps[1]);
        }
    }

    if line.contains(TOTAL_MARKER) {
        if let Some(caps) = TOTAL_FLIGHT_TIME.captures(line) {
            consumed |= builder.set_total_allowance(&caps[1]);
        }
    }

    consumed
}
