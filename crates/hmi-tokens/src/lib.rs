//! Border radius design tokens for the performance night HMI theme.
//!
//! The crate is a fixed lookup table from token names to lengths in
//! density-independent pixels. Values never change at runtime; consumers read
//! them through the module constants or the shared [`BORDER_RADIUS`] set.
//!
//! ```
//! use hmi_tokens::{BORDER_RADIUS, Dp, RadiusToken};
//!
//! assert_eq!(BORDER_RADIUS.radius8, Dp::new(8.0));
//! assert_eq!(BORDER_RADIUS.get(RadiusToken::Md), Dp::new(8.0));
//! assert_eq!(BORDER_RADIUS.lookup("xs").unwrap().to_string(), "2dp");
//! ```

pub mod audit;
pub mod border_radius;
pub mod dp;
pub mod error;
pub mod token;

pub use audit::{AuditIssue, AuditReport, IssueSeverity, audit};
pub use border_radius::{
    BORDER_RADIUS, BorderRadiusTokens, MD, RADIUS_0, RADIUS_4, RADIUS_8, RADIUS_16, RADIUS_24, SM,
    XS, border_radius,
};
pub use dp::Dp;
pub use error::{Result, TokenError};
pub use token::RadiusToken;
