//! Translation direction
//!
//! A direction is always explicit. It is parsed either from its name
//! (`american-to-british`, `british-to-american`) or from an English locale
//! tag naming the *target* dialect (`en-GB`, `en-US`). Anything else is
//! rejected; there is no fallback direction.

use crate::error::TranslateError;
use icu_locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regions whose English follows British usage
const BRITISH_REGIONS: &[&str] = &["GB", "UK", "IE", "AU", "NZ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    AmericanToBritish,
    BritishToAmerican,
}

impl Direction {
    pub const ALL: [Direction; 2] = [
        Direction::AmericanToBritish,
        Direction::BritishToAmerican,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::AmericanToBritish => "american-to-british",
            Direction::BritishToAmerican => "british-to-american",
        }
    }

    /// The opposite direction
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::AmericanToBritish => Direction::BritishToAmerican,
            Direction::BritishToAmerican => Direction::AmericanToBritish,
        }
    }

    /// Direction whose target dialect is the one spoken in `tag`
    ///
    /// ```ignore
    /// assert_eq!(Direction::from_locale("en-GB")?, Direction::AmericanToBritish);
    /// assert_eq!(Direction::from_locale("en-US")?, Direction::BritishToAmerican);
    /// ```
    pub fn from_locale(tag: &str) -> Result<Direction, TranslateError> {
        let invalid = || TranslateError::InvalidDirection(tag.to_string());
        let locale: Locale = tag.parse().map_err(|_| invalid())?;

        if locale.id.language.as_str() != "en" {
            return Err(invalid());
        }

        // A bare "en" names no dialect
        let region = locale.id.region.ok_or_else(invalid)?;
        match region.as_str() {
            "US" => Ok(Direction::BritishToAmerican),
            r if BRITISH_REGIONS.contains(&r) => Ok(Direction::AmericanToBritish),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "american-to-british" => Ok(Direction::AmericanToBritish),
            "british-to-american" => Ok(Direction::BritishToAmerican),
            other => Direction::from_locale(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "american-to-british".parse::<Direction>().unwrap(),
            Direction::AmericanToBritish
        );
        assert_eq!(
            "british-to-american".parse::<Direction>().unwrap(),
            Direction::BritishToAmerican
        );
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!(Direction::from_locale("en-GB").unwrap(), Direction::AmericanToBritish);
        assert_eq!(Direction::from_locale("en-AU").unwrap(), Direction::AmericanToBritish);
        assert_eq!(Direction::from_locale("en-US").unwrap(), Direction::BritishToAmerican);
        assert_eq!("en-GB".parse::<Direction>().unwrap(), Direction::AmericanToBritish);
    }

    #[test]
    fn test_invalid_selectors_fail() {
        for bad in ["", "british", "american-to-french", "en", "fr-FR", "en-IN", "not a tag"] {
            match bad.parse::<Direction>() {
                Err(TranslateError::InvalidDirection(value)) => assert_eq!(value, bad),
                other => panic!("expected InvalidDirection for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Direction::AmericanToBritish).unwrap(),
            "\"american-to-british\""
        );
        let parsed: Direction = serde_json::from_str("\"british-to-american\"").unwrap();
        assert_eq!(parsed, Direction::BritishToAmerican);
    }
}
