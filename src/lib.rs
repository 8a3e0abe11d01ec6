// ============================================================================
// Decimal Matcher Library
// Exact decimal validation with configurable digit limits
// ============================================================================

//! # Decimal Matcher
//!
//! Validates that a value represents a decimal number within configurable
//! digit-count limits.
//!
//! ## Features
//!
//! - **Exact, arbitrary-precision parsing**: digit counts never go through
//!   floating point or a fixed-width mantissa
//! - **Accumulated, coded errors** (`doubleNumber.e001`..`e003`) instead of
//!   panics or early returns
//! - **Typed configuration** with documented defaulting rules
//! - **Pluggable matchers** behind the [`ValueMatcher`](interfaces::ValueMatcher) trait
//! - `rust_decimal::Decimal` interop at API boundaries
//!
//! ## Example
//!
//! ```rust
//! use decimal_matcher::prelude::*;
//!
//! // At most 7 significant digits, at most 2 decimal places
//! let matcher = DecimalMatcher::from_config(
//!     MatcherConfig::new().with_max_digits(7).with_max_decimal_places(2),
//! );
//!
//! assert!(matcher.match_value("12345.67").is_valid());
//! assert!(matcher.match_value(None::<&str>).is_valid());
//!
//! let result = matcher.match_value("not a number");
//! assert_eq!(result.codes().collect::<Vec<_>>(), vec!["doubleNumber.e001"]);
//!
//! let result = matcher.match_value("123456.789");
//! for error in &result {
//!     println!("{}: {}", error.code, error.message);
//! }
//! ```

pub mod domain;
pub mod interfaces;
pub mod matcher;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ErrorCode, ErrorKind, MatcherConfig, ValidationError, ValidationResult, DEFAULT_MAX_DIGITS,
    };
    pub use crate::interfaces::{Candidate, ValueMatcher};
    pub use crate::matcher::DecimalMatcher;
    pub use crate::numeric::{ExactDecimal, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_validation() {
        let matcher = DecimalMatcher::from_config(MatcherConfig::money());

        // Valid amounts
        for amount in ["0", "19.99", "-5.5", "12345678.90", "+0.01"] {
            let result = matcher.match_value(amount);
            assert!(result.is_valid(), "{amount}: {result}");
            assert!(result.into_result().is_ok());
        }

        // Too many cents
        let result = matcher.match_value("19.999");
        assert_eq!(result.len(), 1);
        assert_eq!(result.errors()[0].code, ErrorCode::MaxDecimalPlacesExceeded.code());
        assert_eq!(result.errors()[0].kind, ErrorKind::InvalidType);

        // Too large and too fine
        let result = matcher.match_value("123456789012.345");
        assert_eq!(
            result.codes().collect::<Vec<_>>(),
            vec!["doubleNumber.e002", "doubleNumber.e003"]
        );

        // Garbage
        let err = matcher.match_value("12.3.4").into_result().unwrap_err();
        assert_eq!(err.to_string(), "doubleNumber.e001: The value is not a valid decimal number.");
    }

    #[test]
    fn test_text_and_decimal_agree() {
        let matcher = DecimalMatcher::new(Some(6), Some(3));

        for (text, decimal) in [
            ("1.500", Decimal::new(1500, 3)),
            ("123456.7", Decimal::new(1234567, 1)),
            ("-0.0001", Decimal::new(-1, 4)),
            ("1000000", Decimal::new(1_000_000, 0)),
        ] {
            assert_eq!(
                matcher.match_value(text),
                matcher.match_value(decimal),
                "{text} vs {decimal}"
            );
        }
    }

    #[test]
    fn test_results_compose() {
        let price = DecimalMatcher::new(Some(9), Some(2));
        let quantity = DecimalMatcher::from_config(MatcherConfig::integer_only(6));

        let mut combined = ValidationResult::new();
        combined.merge(price.match_value("10.125"));
        combined.merge(quantity.match_value("1.5"));
        combined.merge(quantity.match_value(None::<&str>));

        assert_eq!(combined.len(), 2);
        assert!(combined
            .errors()
            .iter()
            .all(|e| e.code == ErrorCode::MaxDecimalPlacesExceeded.code()));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let matcher = DecimalMatcher::new(Some(3), Some(1));

        let first = matcher.match_value("1234.56");
        let second = matcher.match_value("1234.56");
        assert_eq!(first, second);

        // An earlier failure does not leak into later results
        assert!(matcher.match_value("12.3").is_valid());
    }
}
