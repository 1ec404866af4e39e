//! Property tests for parsing `Dp` values.

use hmi_tokens::{Dp, TokenError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn displayed_values_parse_back(value in 0.0f32..10_000.0) {
        let dp = Dp::new(value);
        let parsed: Dp = dp.to_string().parse().unwrap();
        prop_assert_eq!(parsed, dp);
    }

    #[test]
    fn bare_integers_parse_with_or_without_suffix(value in 0u16..=1024) {
        let bare: Dp = value.to_string().parse().unwrap();
        let suffixed: Dp = format!("{value} dp").parse().unwrap();
        prop_assert_eq!(bare, suffixed);
        prop_assert_eq!(bare.get(), f32::from(value));
    }

    #[test]
    fn negative_values_are_rejected(value in -10_000.0f32..-0.001) {
        let result = format!("{value}dp").parse::<Dp>();
        let is_negative_error = matches!(
            result,
            Err(TokenError::InvalidDimension { reason: "value must not be negative", .. })
        );
        prop_assert!(is_negative_error);
    }
}
