//! Clock time handling for pairing documents.
//!
//! The pairing file prints departure and arrival times as bare 4-digit
//! "HHMM" strings with no separator (e.g. "0815"). This module provides a
//! validated type for those fields.

use std::fmt;

/// Error returned when parsing an invalid clock string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct InvalidClockTime {
    reason: &'static str,
}

impl InvalidClockTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A local time of day in the pairing file's "HHMM" format.
///
/// # Examples
///
/// ```
/// use pairing_server::domain::ClockTime;
///
/// let dep = ClockTime::parse("0815").unwrap();
/// assert_eq!(dep.hour(), 8);
/// assert_eq!(dep.minute(), 15);
/// assert_eq!(dep.to_string(), "0815");
///
/// // The document never uses separators
/// assert!(ClockTime::parse("08:15").is_err());
/// assert!(ClockTime::parse("2500").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Parse a time from the document's 4-digit "HHMM" format.
    pub fn parse(s: &str) -> Result<Self, InvalidClockTime> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidClockTime::new("expected exactly 4 digits"));
        }

        let digit = |b: u8| (b as char).to_digit(10);

        let hour = digit(bytes[0])
            .zip(digit(bytes[1]))
            .map(|(d1, d2)| d1 * 10 + d2)
            .ok_or_else(|| InvalidClockTime::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(InvalidClockTime::new("hour must be 0-23"));
        }

        let minute = digit(bytes[2])
            .zip(digit(bytes[3]))
            .map(|(d1, d2)| d1 * 10 + d2)
            .ok_or_else(|| InvalidClockTime::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(InvalidClockTime::new("minute must be 0-59"));
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes from midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}
