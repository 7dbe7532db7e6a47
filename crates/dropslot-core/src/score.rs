//! PercentScore - the 0-100 grade reported for an exercise.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer percentage score between 0 and 100 inclusive.
///
/// Judges produce one of these for every arrangement: binary exercises
/// grade a flat 0 or 100, the team exercise grades a weighted blend.
/// All constructors clamp into range, so an out-of-range value is
/// unrepresentable.
///
/// # Examples
///
/// ```
/// use dropslot_core::PercentScore;
///
/// let half = PercentScore::from_ratio(0.5);
/// assert_eq!(half.value(), 50);
/// assert!(half < PercentScore::FULL);
/// assert_eq!(PercentScore::of(250), PercentScore::FULL);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PercentScore {
    value: u8,
}

impl PercentScore {
    /// The zero score.
    pub const ZERO: PercentScore = PercentScore { value: 0 };

    /// The full score of 100.
    pub const FULL: PercentScore = PercentScore { value: 100 };

    /// Creates a score, clamping the value to 100.
    #[inline]
    pub const fn of(value: u8) -> Self {
        PercentScore {
            value: if value > 100 { 100 } else { value },
        }
    }

    /// Creates a score from a 0.0-1.0 ratio, rounding to the nearest
    /// percent. Out-of-range ratios (including NaN) clamp into range.
    pub fn from_ratio(ratio: f64) -> Self {
        let clamped = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        PercentScore {
            value: (clamped * 100.0).round() as u8,
        }
    }

    /// Returns the score value (0-100).
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns true if this is the full score of 100.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.value == 100
    }
}

impl Ord for PercentScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for PercentScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for PercentScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PercentScore::of(self.value.saturating_add(other.value))
    }
}

impl Sub for PercentScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        PercentScore {
            value: self.value.saturating_sub(other.value),
        }
    }
}

impl fmt::Debug for PercentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PercentScore({})", self.value)
    }
}

impl fmt::Display for PercentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<u8> for PercentScore {
    fn from(value: u8) -> Self {
        PercentScore::of(value)
    }
}

/// Error type for score parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScoreParseError {
    /// Human-readable description of the parse failure.
    pub message: String,
}

impl FromStr for PercentScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('%').unwrap_or(s);

        match s.parse::<u8>() {
            Ok(value) if value <= 100 => Ok(PercentScore { value }),
            Ok(value) => Err(ScoreParseError {
                message: format!("PercentScore '{}' is out of range 0-100", value),
            }),
            Err(e) => Err(ScoreParseError {
                message: format!("Invalid PercentScore '{}': {}", s, e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_clamps() {
        assert_eq!(PercentScore::of(85).value(), 85);
        assert_eq!(PercentScore::of(200), PercentScore::FULL);
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(PercentScore::from_ratio(0.0), PercentScore::ZERO);
        assert_eq!(PercentScore::from_ratio(1.0), PercentScore::FULL);
        assert_eq!(PercentScore::from_ratio(0.5).value(), 50);
        assert_eq!(PercentScore::from_ratio(1.0 / 3.0).value(), 33);
        assert_eq!(PercentScore::from_ratio(-0.5), PercentScore::ZERO);
        assert_eq!(PercentScore::from_ratio(2.0), PercentScore::FULL);
        assert_eq!(PercentScore::from_ratio(f64::NAN), PercentScore::ZERO);
    }

    #[test]
    fn test_comparison() {
        assert!(PercentScore::of(40) < PercentScore::of(60));
        assert!(PercentScore::FULL > PercentScore::ZERO);
    }

    #[test]
    fn test_arithmetic_stays_in_range() {
        assert_eq!(
            PercentScore::of(70) + PercentScore::of(50),
            PercentScore::FULL
        );
        assert_eq!(
            PercentScore::of(30) - PercentScore::of(50),
            PercentScore::ZERO
        );
        assert_eq!(
            PercentScore::of(60) - PercentScore::of(25),
            PercentScore::of(35)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<PercentScore>().unwrap(), PercentScore::of(42));
        assert_eq!("85%".parse::<PercentScore>().unwrap(), PercentScore::of(85));
        assert!("120".parse::<PercentScore>().is_err());
        assert!("abc".parse::<PercentScore>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PercentScore::of(85).to_string(), "85");
        assert_eq!(format!("{:?}", PercentScore::of(85)), "PercentScore(85)");
    }
}
