//! Border radius tokens for the performance night theme.
//!
//! All values are in density-independent pixels and are fixed at compile time.

use serde::Serialize;

use crate::dp::Dp;
use crate::error::Result;
use crate::token::RadiusToken;

// =============================================================================
// RADIUS SCALE
// =============================================================================

/// Square corners.
pub const RADIUS_0: Dp = Dp::new(0.0);

pub const RADIUS_4: Dp = Dp::new(4.0);

pub const RADIUS_8: Dp = Dp::new(8.0);

pub const RADIUS_16: Dp = Dp::new(16.0);

pub const RADIUS_24: Dp = Dp::new(24.0);

// =============================================================================
// SIZE SCALE
// =============================================================================

/// Extra small radius. Not an alias: there is no `radius2` token.
pub const XS: Dp = Dp::new(2.0);

/// Small radius, same magnitude as [`RADIUS_4`].
pub const SM: Dp = Dp::new(4.0);

/// Medium radius, same magnitude as [`RADIUS_8`].
pub const MD: Dp = Dp::new(8.0);

/// The full set of border radius tokens.
///
/// Fields are public for reading; the process-wide instance is
/// [`BORDER_RADIUS`], which is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BorderRadiusTokens {
    pub radius0: Dp,
    pub radius4: Dp,
    pub radius8: Dp,
    pub radius16: Dp,
    pub radius24: Dp,
    pub xs: Dp,
    pub sm: Dp,
    pub md: Dp,
}

impl BorderRadiusTokens {
    /// Values shipped with the performance night theme.
    pub const PERFORMANCE_NIGHT: BorderRadiusTokens = BorderRadiusTokens {
        radius0: RADIUS_0,
        radius4: RADIUS_4,
        radius8: RADIUS_8,
        radius16: RADIUS_16,
        radius24: RADIUS_24,
        xs: XS,
        sm: SM,
        md: MD,
    };

    /// Returns the value of a token.
    pub fn get(&self, token: RadiusToken) -> Dp {
        match token {
            RadiusToken::Radius0 => self.radius0,
            RadiusToken::Radius4 => self.radius4,
            RadiusToken::Radius8 => self.radius8,
            RadiusToken::Radius16 => self.radius16,
            RadiusToken::Radius24 => self.radius24,
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
        }
    }

    /// Looks up a token by name (see [`RadiusToken`]'s `FromStr`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::TokenError::UnknownToken`] if the name matches no token.
    pub fn lookup(&self, name: &str) -> Result<Dp> {
        let token = name.parse::<RadiusToken>()?;
        Ok(self.get(token))
    }

    /// Iterates over `(token, value)` pairs in table order.
    pub fn entries(&self) -> impl Iterator<Item = (RadiusToken, Dp)> + '_ {
        RadiusToken::ALL
            .into_iter()
            .map(move |token| (token, self.get(token)))
    }
}

impl Default for BorderRadiusTokens {
    fn default() -> Self {
        Self::PERFORMANCE_NIGHT
    }
}

/// Process-wide token set.
pub static BORDER_RADIUS: BorderRadiusTokens = BorderRadiusTokens::PERFORMANCE_NIGHT;

/// Returns the process-wide token set.
pub fn border_radius() -> &'static BorderRadiusTokens {
    &BORDER_RADIUS
}
