// src/domain/season.rs
//
// Broadcast periods: a year plus one of the four anime seasons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Season of a broadcast year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl Default for Season {
    fn default() -> Self {
        Season::ALL[0]
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(year, season label)` pair as the server spells it, e.g. `"2025 winter"`.
///
/// The label is kept verbatim: servers may use their own wording for seasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub season: String,
}

impl Period {
    /// Parses `"<year> <label>"`. Exactly one space separates the two tokens.
    pub fn parse(raw: &str) -> Option<Period> {
        let parts: Vec<&str> = raw.split(' ').collect();
        if parts.len() != 2 {
            return None;
        }
        let year = parts[0].parse::<i32>().ok()?;
        Some(Period {
            year,
            season: parts[1].to_string(),
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.season)
    }
}

/// A titled entry of a select box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    pub title: String,
    pub value: T,
}

impl<T> SelectOption<T> {
    pub fn new(title: impl Into<String>, value: T) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_season_is_winter() {
        assert_eq!(Season::default(), Season::Winter);
        assert_eq!(Season::ALL[0].as_str(), "winter");
    }

    #[test]
    fn test_period_parse() {
        let period = Period::parse("2025 winter").unwrap();
        assert_eq!(period.year, 2025);
        assert_eq!(period.season, "winter");
        assert_eq!(period.to_string(), "2025 winter");
    }

    #[test]
    fn test_period_keeps_unknown_label() {
        let period = Period::parse("2024 冬季番组").unwrap();
        assert_eq!(period.season, "冬季番组");
    }

    #[test]
    fn test_period_rejects_wrong_shape() {
        assert!(Period::parse("garbage").is_none());
        assert!(Period::parse("2025  winter").is_none());
        assert!(Period::parse("2025 winter extra").is_none());
        assert!(Period::parse("twenty winter").is_none());
        assert!(Period::parse("").is_none());
    }
}
