//! Season labels.

use serde::{Deserialize, Serialize};
use statline_error::{ParseError, ParseErrorKind};
use std::str::FromStr;

/// A season label in `YYYY-YY` form, e.g. `2016-17`.
///
/// # Examples
///
/// ```
/// use statline_core::Season;
///
/// let season: Season = "2008-09".parse().unwrap();
/// assert_eq!(season.as_str(), "2008-09");
/// assert!("2008".parse::<Season>().is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Season(String);

impl Season {
    /// Whether `label` has the `YYYY-YY` shape.
    pub fn is_valid(label: &str) -> bool {
        let bytes = label.as_bytes();
        bytes.len() == 7
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit)
    }

    /// Season starting in the autumn of `start_year`, e.g. `2016` gives `2016-17`.
    pub fn from_start_year(start_year: u16) -> Self {
        Self(format!("{:04}-{:02}", start_year, (start_year + 1) % 100))
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Season {
    type Err = ParseError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::new(ParseErrorKind::InvalidSeason(s.to_string())))
        }
    }
}

impl TryFrom<String> for Season {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.0
    }
}

impl AsRef<str> for Season {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
