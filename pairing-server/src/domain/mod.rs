//! Domain types for pairing documents.
//!
//! These types represent validated fields extracted from a pairing file.
//! All of them enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod airport;
mod clock;
mod weekday;

pub use airport::{Iata, InvalidIata};
pub use clock::{ClockTime, InvalidClockTime};
pub use weekday::{InvalidWeekdayMask, Weekday, parse_weekday_mask};
