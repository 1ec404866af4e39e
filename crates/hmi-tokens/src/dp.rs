//! Density-independent pixel lengths.
//!
//! Every token value is a [`Dp`]. The unit only carries the magnitude; turning
//! it into physical pixels is left to whichever renderer consumes the token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// A length in density-independent pixels.
///
/// Deserialization goes through [`Dp::try_new`], so negative and non-finite
/// lengths are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Dp(f32);

impl Dp {
    /// Zero length.
    pub const ZERO: Dp = Dp(0.0);

    /// Wraps a raw value without validation. Used for token definitions.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Wraps a raw value, rejecting non-finite and negative lengths.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidDimension`] for `NaN`, infinities and
    /// values below zero.
    pub fn try_new(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(TokenError::InvalidDimension {
                input: value.to_string(),
                reason: "value must be finite",
            });
        }
        if value < 0.0 {
            return Err(TokenError::InvalidDimension {
                input: value.to_string(),
                reason: "value must not be negative",
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw magnitude.
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Returns true for finite values at or above zero.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<Dp> for f32 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

impl TryFrom<f32> for Dp {
    type Error = TokenError;

    fn try_from(value: f32) -> Result<Self> {
        Dp::try_new(value)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing "-0dp"
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{value}dp")
    }
}

impl FromStr for Dp {
    type Err = TokenError;

    /// Parses `"8"`, `"8dp"` or `" 2.5 dp "`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let magnitude = match trimmed.len().checked_sub(2) {
            Some(split) if trimmed.is_char_boundary(split)
                && trimmed[split..].eq_ignore_ascii_case("dp") =>
            {
                trimmed[..split].trim_end()
            }
            _ => trimmed,
        };
        if magnitude.is_empty() {
            return Err(TokenError::InvalidDimension {
                input: s.to_string(),
                reason: "missing magnitude",
            });
        }
        let value = magnitude
            .parse::<f32>()
            .map_err(|_| TokenError::InvalidDimension {
                input: s.to_string(),
                reason: "magnitude is not a number",
            })?;
        Dp::try_new(value).map_err(|error| match error {
            TokenError::InvalidDimension { reason, .. } => TokenError::InvalidDimension {
                input: s.to_string(),
                reason,
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_drops_trailing_zeros() {
        assert_eq!(Dp::new(8.0).to_string(), "8dp");
        assert_eq!(Dp::new(0.0).to_string(), "0dp");
        assert_eq!(Dp::new(-0.0).to_string(), "0dp");
        assert_eq!(Dp::new(2.5).to_string(), "2.5dp");
        assert_eq!(Dp::new(16.0).to_string(), "16dp");
    }

    #[test]
    fn test_parse_accepts_suffix_and_whitespace() {
        assert_eq!("8".parse::<Dp>().unwrap(), Dp::new(8.0));
        assert_eq!("8dp".parse::<Dp>().unwrap(), Dp::new(8.0));
        assert_eq!(" 2.5 dp ".parse::<Dp>().unwrap(), Dp::new(2.5));
        assert_eq!("24DP".parse::<Dp>().unwrap(), Dp::new(24.0));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert!(matches!(
            "".parse::<Dp>(),
            Err(TokenError::InvalidDimension {
                reason: "missing magnitude",
                ..
            })
        ));
        assert!(matches!(
            "dp".parse::<Dp>(),
            Err(TokenError::InvalidDimension {
                reason: "missing magnitude",
                ..
            })
        ));
        assert!(matches!(
            "eight".parse::<Dp>(),
            Err(TokenError::InvalidDimension {
                reason: "magnitude is not a number",
                ..
            })
        ));
        assert_eq!(
            "-4dp".parse::<Dp>(),
            Err(TokenError::InvalidDimension {
                input: "-4dp".to_string(),
                reason: "value must not be negative",
            })
        );
        assert!("NaN".parse::<Dp>().is_err());
        assert!("inf".parse::<Dp>().is_err());
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Dp::try_new(0.0), Ok(Dp::ZERO));
        assert!(Dp::try_new(-1.0).is_err());
        assert!(Dp::try_new(f32::NAN).is_err());
        assert!(Dp::try_new(f32::INFINITY).is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(Dp::new(4.0).is_valid());
        assert!(Dp::ZERO.is_valid());
        assert!(!Dp::new(-4.0).is_valid());
        assert!(!Dp::new(f32::NAN).is_valid());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Dp::new(8.0)).unwrap();
        assert_eq!(json, "8.0");
        let parsed: Dp = serde_json::from_str("2.0").unwrap();
        assert_eq!(parsed, Dp::new(2.0));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!("-4".parse::<Dp>().is_err());
        let result = serde_json::from_str::<Dp>("-4.0");
        let error = result.unwrap_err().to_string();
        assert!(error.contains("value must not be negative"), "{error}");
    }

    #[test]
    fn test_try_from_matches_try_new() {
        assert_eq!(Dp::try_from(24.0_f32), Ok(Dp::new(24.0)));
        assert_eq!(Dp::try_from(-0.5_f32), Dp::try_new(-0.5));
        assert!(Dp::try_from(f32::NAN).is_err());
        assert_eq!(f32::from(Dp::new(16.0)), 16.0);
    }
}
