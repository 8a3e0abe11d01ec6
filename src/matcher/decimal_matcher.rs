// ============================================================================
// Decimal Matcher
// Validates decimal numbers against digit and decimal-place limits
// ============================================================================

use crate::domain::{ErrorCode, MatcherConfig, ValidationResult};
use crate::interfaces::{Candidate, ValueMatcher};
use crate::numeric::ExactDecimal;

/// Validates that a value is a decimal number (or absent) within limits.
///
/// Decimal separator is always `.`. Checks, in order:
/// 1. parse failure -> `doubleNumber.e001`, nothing else is checked
/// 2. significant digits above the digit limit -> `doubleNumber.e002`
/// 3. decimal places above the decimal-place limit (only when configured)
///    -> `doubleNumber.e003`
///
/// Checks 2 and 3 are independent, so one value can report both.
///
/// # Example
/// ```
/// use decimal_matcher::prelude::*;
///
/// let matcher = DecimalMatcher::new(Some(5), Some(2));
///
/// assert!(matcher.match_value("123.45").is_valid());
/// assert!(matcher.match_value(None::<&str>).is_valid());
///
/// let result = matcher.match_value("1234.567");
/// assert!(result.has_code("doubleNumber.e002"));
/// assert!(result.has_code("doubleNumber.e003"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalMatcher {
    config: MatcherConfig,
}

impl DecimalMatcher {
    /// Create a matcher from optional limits.
    ///
    /// `max_digits` of `None` or `Some(0)` uses the default of 11;
    /// `max_decimal_places` of `None` skips the decimal-places check.
    pub fn new(max_digits: Option<u32>, max_decimal_places: Option<u32>) -> Self {
        Self::from_config(MatcherConfig {
            max_digits,
            max_decimal_places,
        })
    }

    /// Create a matcher from a configuration
    pub fn from_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Create a matcher from signed limits (see [`MatcherConfig::from_signed`])
    pub fn from_signed_limits(max_digits: Option<i64>, max_decimal_places: Option<i64>) -> Self {
        Self::from_config(MatcherConfig::from_signed(max_digits, max_decimal_places))
    }

    /// Configuration the matcher was built with
    #[inline]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Significant-digit limit in force
    #[inline]
    pub fn max_digits(&self) -> u32 {
        self.config.effective_max_digits()
    }

    /// Decimal-place limit in force, if any
    #[inline]
    pub fn max_decimal_places(&self) -> Option<u32> {
        self.config.effective_max_decimal_places()
    }

    /// Validate a value.
    ///
    /// Accepts anything convertible to a [`Candidate`]: string slices,
    /// `rust_decimal::Decimal`, integers, [`ExactDecimal`] and `Option`s of
    /// those. Never panics; all failures are entries of the result.
    pub fn match_value<'a>(&self, value: impl Into<Candidate<'a>>) -> ValidationResult {
        let mut result = ValidationResult::new();

        let decimal = match value.into() {
            Candidate::Absent => {
                tracing::trace!("decimal matcher: absent value accepted");
                return result;
            },
            Candidate::Exact(decimal) => decimal,
            Candidate::Text(text) => match text.parse::<ExactDecimal>() {
                Ok(decimal) => decimal,
                Err(err) => {
                    tracing::debug!(
                        error = %err,
                        "decimal matcher: value rejected as not a decimal"
                    );
                    result.add_error(ErrorCode::InvalidDecimal.into());
                    return result;
                },
            },
        };

        self.validate_digits_count(&decimal, &mut result);
        self.validate_decimal_places_count(&decimal, &mut result);

        result
    }

    /// Validate and collapse to a boolean
    pub fn is_valid<'a>(&self, value: impl Into<Candidate<'a>>) -> bool {
        self.match_value(value).is_valid()
    }

    fn validate_digits_count(&self, decimal: &ExactDecimal, result: &mut ValidationResult) {
        let max_digits = self.max_digits();
        let precision = decimal.precision();

        if precision > u64::from(max_digits) {
            tracing::debug!(
                precision,
                max_digits,
                "decimal matcher: maximum number of digits exceeded"
            );
            result.add_error(ErrorCode::MaxDigitsExceeded.into());
        }
    }

    fn validate_decimal_places_count(&self, decimal: &ExactDecimal, result: &mut ValidationResult) {
        let Some(max_decimal_places) = self.max_decimal_places() else {
            return;
        };
        let decimal_places = decimal.decimal_places();

        if decimal_places > u64::from(max_decimal_places) {
            tracing::debug!(
                decimal_places,
                max_decimal_places,
                "decimal matcher: maximum number of decimal places exceeded"
            );
            result.add_error(ErrorCode::MaxDecimalPlacesExceeded.into());
        }
    }
}

impl ValueMatcher for DecimalMatcher {
    fn match_value(&self, value: Candidate<'_>) -> ValidationResult {
        DecimalMatcher::match_value(self, value)
    }

    fn name(&self) -> &str {
        "DecimalMatcher"
    }
}
