//! Weekday masks.
//!
//! Flight lines begin with a digit string describing which days of the week
//! the leg operates: each character is one weekday, 1=Monday through
//! 7=Sunday. "15" means Monday and Friday; "1234567" means daily.

use std::fmt;

/// Error returned when a weekday mask contains a digit outside 1-7.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday mask {mask:?}: digit {digit:?} is outside 1-7")]
pub struct InvalidWeekdayMask {
    mask: String,
    digit: char,
}

/// A single operating weekday, 1=Monday through 7=Sunday.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weekday(u8);

impl Weekday {
    /// Construct from a digit character `'1'`-`'7'`.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1'..='7' => Some(Weekday(c as u8 - b'0')),
            _ => None,
        }
    }

    /// The weekday number, 1=Monday through 7=Sunday.
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weekday({})", self.0)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split a weekday mask into individual weekdays, in mask order.
///
/// Duplicate digits do not occur in well-formed documents; if one does
/// appear, it is dropped rather than double-counted. A digit outside 1-7
/// is an error, since the mask position carries meaning and a stray 0, 8
/// or 9 indicates a garbled line.
///
/// # Examples
///
/// ```
/// use pairing_server::domain::parse_weekday_mask;
///
/// let days = parse_weekday_mask("15").unwrap();
/// let numbers: Vec<u8> = days.iter().map(|d| d.number()).collect();
/// assert_eq!(numbers, vec![1, 5]);
///
/// assert!(parse_weekday_mask("180").is_err());
/// ```
pub fn parse_weekday_mask(mask: &str) -> Result<Vec<Weekday>, InvalidWeekdayMask> {
    let mut days = Vec::with_capacity(mask.len());
    for c in mask.chars() {
        let day = Weekday::from_digit(c).ok_or_else(|| InvalidWeekdayMask {
            mask: mask.to_string(),
            digit: c,
        })?;
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Ok(days)
}
