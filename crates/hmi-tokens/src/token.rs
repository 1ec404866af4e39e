//! Symbolic names of the border radius tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// Name of a border radius token.
///
/// The `radiusN` names carry their magnitude in the name. `xs`, `sm` and `md`
/// are size-scale names; `sm` and `md` mirror `radius4` and `radius8` by
/// convention, while `xs` has no `radiusN` counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RadiusToken {
    #[serde(rename = "radius0")]
    Radius0,
    #[serde(rename = "radius4")]
    Radius4,
    #[serde(rename = "radius8")]
    Radius8,
    #[serde(rename = "radius16")]
    Radius16,
    #[serde(rename = "radius24")]
    Radius24,
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
}

impl RadiusToken {
    /// Every token, in table order.
    pub const ALL: [RadiusToken; 8] = [
        RadiusToken::Radius0,
        RadiusToken::Radius4,
        RadiusToken::Radius8,
        RadiusToken::Radius16,
        RadiusToken::Radius24,
        RadiusToken::Xs,
        RadiusToken::Sm,
        RadiusToken::Md,
    ];

    /// Returns the canonical token name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RadiusToken::Radius0 => "radius0",
            RadiusToken::Radius4 => "radius4",
            RadiusToken::Radius8 => "radius8",
            RadiusToken::Radius16 => "radius16",
            RadiusToken::Radius24 => "radius24",
            RadiusToken::Xs => "xs",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
        }
    }

    /// Returns the `radiusN` token this name is documented to mirror.
    ///
    /// The relationship is a naming convention only; the values are defined
    /// independently and [`crate::audit`] reports any drift between them.
    pub fn alias_of(&self) -> Option<RadiusToken> {
        match self {
            RadiusToken::Sm => Some(RadiusToken::Radius4),
            RadiusToken::Md => Some(RadiusToken::Radius8),
            _ => None,
        }
    }

    /// Returns true for the size-scale aliases (`sm`, `md`).
    pub fn is_alias(&self) -> bool {
        self.alias_of().is_some()
    }
}

impl fmt::Display for RadiusToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RadiusToken {
    type Err = TokenError;

    /// Parse a token name, case-insensitive, ignoring `_` and `-`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "radius0" => Ok(RadiusToken::Radius0),
            "radius4" => Ok(RadiusToken::Radius4),
            "radius8" => Ok(RadiusToken::Radius8),
            "radius16" => Ok(RadiusToken::Radius16),
            "radius24" => Ok(RadiusToken::Radius24),
            "xs" => Ok(RadiusToken::Xs),
            "sm" => Ok(RadiusToken::Sm),
            "md" => Ok(RadiusToken::Md),
            _ => Err(TokenError::UnknownToken(s.trim().to_string())),
        }
    }
}
