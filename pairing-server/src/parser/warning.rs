//! Parse warnings.
//!
//! Line-level classification failure is normal (most lines of a pairing
//! file are formatting noise) and never reported. The conditions here are
//! the ones a caller genuinely needs to see: silent data loss at the end
//! of the document, and fields that matched a pattern but failed numeric
//! validation.

/// A non-fatal condition observed while parsing a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    /// The document ended while a pairing was still accumulating: the final
    /// block was never terminated by a boundary line, so it was dropped
    /// from the results.
    #[error("document ended mid-pairing: {pairing} was never closed by a boundary line")]
    IncompleteTrailingPairing {
        /// The pairing number if one was seen, otherwise its ordinal.
        pairing: String,
    },

    /// A field matched its extraction pattern but its captured value failed
    /// validation. The field is left unset (or the flight dropped) rather
    /// than handing a garbled value downstream.
    #[error("malformed {field} in {pairing}: {value:?}")]
    MalformedField {
        /// The pairing number if one was seen, otherwise its ordinal.
        pairing: String,
        /// Which field was garbled.
        field: &'static str,
        /// The captured text that failed validation.
        value: String,
    },
}
