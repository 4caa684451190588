//! The pairing-file parser.
//!
//! A pairing file prints one block per trip, terminated by a ruler line of
//! `=` characters. Inside a block, fields are recognised by marker tokens
//! and column patterns: a header line with the pairing number and date
//! range, one line per flight leg, totals lines, and hotel names for
//! layovers. Everything else is formatting noise and is skipped.
//!
//! Parsing is a single pass: each line either completes the current block,
//! mutates the in-progress accumulator through exactly one rule tier, or
//! does nothing. The pass is pure and synchronous; independent documents
//! can be parsed concurrently without shared state.

mod accumulator;
mod classifier;
mod driver;
mod flight;
mod layover;
mod patterns;
mod records;
mod warning;

use crate::extract::{ExtractError, TextExtractor};

pub use driver::parse_pairing_file;
pub use records::{Flight, Layover, Pairing};
pub use warning::ParseWarning;

/// The result of parsing one document: completed pairings in document
/// order, plus any non-fatal conditions worth surfacing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Completed pairings, in document order.
    pub pairings: Vec<Pairing>,

    /// Non-fatal conditions observed during the parse.
    pub warnings: Vec<ParseWarning>,
}

/// Extract text from a raw document and parse it.
///
/// Extraction failure is surfaced as an error, never conflated with a
/// document that simply contains no pairings.
pub fn parse_document(
    extractor: &dyn TextExtractor,
    document: &[u8],
    limit: Option<usize>,
) -> Result<ParseOutcome, ExtractError> {
    let lines = extractor.extract(document)?;
    Ok(parse_pairing_file(&lines, limit))
}
