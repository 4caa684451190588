//! Airport codes as they appear in the flight-leg columns.

use std::fmt;
use std::str::FromStr;

/// A 3-letter IATA airport code, such as the YYZ/YUL/BGI columns of a
/// flight line.
///
/// The flight-line pattern only guarantees three word characters, so the
/// captured station columns go through this type before a leg is accepted;
/// anything that is not three uppercase letters marks the leg malformed.
///
/// # Examples
///
/// ```
/// use pairing_server::domain::Iata;
///
/// let yul: Iata = "YUL".parse().unwrap();
/// assert_eq!(yul.as_str(), "YUL");
/// assert!("Y2Z".parse::<Iata>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iata([u8; 3]);

/// Why a captured station column was not a usable airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIata {
    #[error("airport code `{0}` is not three letters long")]
    WrongLength(String),

    #[error("airport code `{0}` contains a character outside A-Z")]
    NotUppercaseLetters(String),
}

impl Iata {
    pub fn as_str(&self) -> &str {
        // The constructor admits only ASCII uppercase bytes.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl FromStr for Iata {
    type Err = InvalidIata;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(InvalidIata::NotUppercaseLetters(s.to_string()));
        }
        let code: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InvalidIata::WrongLength(s.to_string()))?;
        Ok(Iata(code))
    }
}

impl TryFrom<&str> for Iata {
    type Error = InvalidIata;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}
