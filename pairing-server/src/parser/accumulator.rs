//! The in-progress pairing accumulator.
//!
//! One `PairingBuilder` exists at any time during a parse. It is owned by
//! the driver loop, mutated by whichever classifier rule matches each line,
//! and replaced by a fresh builder at every pairing boundary.

use super::records::{Flight, Pairing};

/// Mutable builder for the pairing currently being accumulated.
///
/// Every scalar setter is set-once: a second matching line for a field that
/// is already populated is accepted but changes nothing. The setters return
/// whether they newly populated their field, which is what the classifier
/// uses to decide that a line was consumed.
#[derive(Debug, Default)]
pub(super) struct PairingBuilder {
    pairing_number: Option<String>,
    operating_dates: Option<String>,
    flights: Vec<Flight>,
    layovers: u32,
    block_time: Option<String>,
    tafb: Option<String>,
    total_allowance: Option<String>,
}

/// Set-once scalar setter: populates the field and reports `true` only if
/// it was previously unset.
fn set_once(slot: &mut Option<String>, value: &str) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value.to_string());
    true
}

impl PairingBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Whether any line has contributed to this builder yet. Used to decide
    /// whether an unterminated trailing block is worth a warning.
    pub(super) fn is_untouched(&self) -> bool {
        self.pairing_number.is_none()
            && self.operating_dates.is_none()
            && self.flights.is_empty()
            && self.block_time.is_none()
            && self.tafb.is_none()
            && self.total_allowance.is_none()
    }

    /// A human-readable name for this pairing in diagnostics: the pairing
    /// number when known, otherwise its ordinal position in the document.
    /// `emitted` is the number of pairings already completed.
    pub(super) fn label(&self, emitted: usize) -> String {
        match &self.pairing_number {
            Some(number) => number.clone(),
            None => format!("pairing #{}", emitted + 1),
        }
    }

    pub(super) fn set_pairing_number(&mut self, value: &str) -> bool {
        set_once(&mut self.pairing_number, value)
    }

    pub(super) fn set_operating_dates(&mut self, value: &str) -> bool {
        set_once(&mut self.operating_dates, value)
    }

    pub(super) fn set_block_time(&mut self, value: &str) -> bool {
        set_once(&mut self.block_time, value)
    }

    pub(super) fn set_tafb(&mut self, value: &str) -> bool {
        set_once(&mut self.tafb, value)
    }

    pub(super) fn set_total_allowance(&mut self, value: &str) -> bool {
        set_once(&mut self.total_allowance, value)
    }

    pub(super) fn has_total_allowance(&self) -> bool {
        self.total_allowance.is_some()
    }

    /// Append a flight leg, keeping the layover counter in sync.
    pub(super) fn push_flight(&mut self, flight: Flight) {
        if flight.has_layover {
            self.layovers += 1;
        }
        self.flights.push(flight);
    }

    /// The most recently appended flight, if any. The layover attacher
    /// only ever targets this leg.
    pub(super) fn last_flight_mut(&mut self) -> Option<&mut Flight> {
        self.flights.last_mut()
    }

    /// Finish the block and hand ownership of the record to the output.
    pub(super) fn finish(self) -> Pairing {
        Pairing {
            pairing_number: self.pairing_number.unwrap_or_default(),
            operating_dates: self.operating_dates.unwrap_or_default(),
            flights: self.flights,
            layovers: self.layovers,
            block_time: self.block_time.unwrap_or_default(),
            tafb: self.tafb.unwrap_or_default(),
            total_allowance: self.total_allowance.unwrap_or_default(),
        }
    }
}
