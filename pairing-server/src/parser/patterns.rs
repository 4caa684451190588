//! Compiled extraction patterns.
//!
//! These mirror the column layout of the pairing file print-out exactly.
//! Several are deliberately loose (word characters where letters are
//! expected, an unescaped `.` in the allowance amount) because the
//! print-out is not perfectly regular; field-level validation happens
//! after capture, not in the pattern.
//!
//! The word and digit classes are ASCII (`(?-u:\w)`, `[0-9]`): the
//! print-out is ASCII, and a line carrying accented or non-Latin text
//! must fall through unmatched rather than be consumed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker token on the line carrying the pairing number and date range.
pub const OPERATES_MARKER: &str = "OPERATES/OPER-";
/// Marker token on the block-hours line.
pub const BLOCK_TIME_MARKER: &str = "BLOCK/H-VOL";
/// Marker token on the allowance line.
pub const ALLOWANCE_MARKER: &str = "TOTAL ALLOWANCE";
/// Marker token on the time-away-from-base line.
pub const TAFB_MARKER: &str = "TAFB/PTEB";
/// Marker token on the flight-hours total line.
pub const TOTAL_MARKER: &str = "TOTAL -";

/// Date range such as "15APR - 25APR".
pub static OPERATING_DATES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\w){5}\s+-\s+(?-u:\w){5}").unwrap());

/// Pairing identifier such as "T5001".
pub static PAIRING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"T[0-9]+").unwrap());

/// Block hours figure following the block marker.
pub static BLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"BLOCK/H-VOL\s+([0-9]+)").unwrap());

/// Allowance amount following the allowance marker. The middle `.` is left
/// unescaped so that a garbled decimal separator still captures; the value
/// is validated as a number afterwards.
pub static ALLOWANCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TOTAL ALLOWANCE -\$\s+([0-9]+.[0-9]+)").unwrap());

/// TAFB figure following the TAFB marker.
pub static TAFB: Lazy<Regex> = Lazy::new(|| Regex::new(r"TAFB/PTEB\s+([0-9]+)").unwrap());

/// Flight-hours figure on the totals line.
pub static TOTAL_FLIGHT_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TOTAL -\s+([0-9]+)").unwrap());

/// One flight leg. Groups, in order: weekday mask, aircraft type, flight
/// number, departure code, departure time, arrival code, arrival time,
/// flight time, optional duty time, optional layover duration.
pub static FLIGHT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([0-9]+)\s+((?-u:\w)+)\s+([0-9]+)\s+((?-u:\w){3})\s([0-9]{4})\s+((?-u:\w){3})\s([0-9]{4})\s+([0-9]+)(?:\s+([0-9]+))?(?:\s+([0-9]+))?",
    )
    .unwrap()
});

/// Hotel name: a word sequence delimited on both sides by runs of two or
/// more spaces (the print-out's column-alignment convention).
pub static LAYOVER_HOTEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}((?-u:\w)+(?:\s(?-u:\w)+)*)\s{2,}").unwrap());
