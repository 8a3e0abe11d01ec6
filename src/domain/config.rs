// ============================================================================
// Matcher Configuration
// Typed digit and decimal-place limits for decimal validation
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum significant digits applied when no positive limit is configured
pub const DEFAULT_MAX_DIGITS: u32 = 11;

// ============================================================================
// Complete Matcher Configuration
// ============================================================================

/// Limits for a decimal matcher.
///
/// Both limits are optional:
/// - `max_digits`: `None` or `Some(0)` means [`DEFAULT_MAX_DIGITS`]
/// - `max_decimal_places`: `None` disables the decimal-places check;
///   `Some(0)` allows no fractional digits at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", from = "SignedLimits"))]
pub struct MatcherConfig {
    /// Maximum number of significant digits
    pub max_digits: Option<u32>,

    /// Maximum number of digits after the decimal point
    pub max_decimal_places: Option<u32>,
}

/// Wire form of [`MatcherConfig`]: limits arrive signed and are coerced
/// through [`MatcherConfig::from_signed`].
#[cfg(feature = "serde")]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SignedLimits {
    max_digits: Option<i64>,
    max_decimal_places: Option<i64>,
}

#[cfg(feature = "serde")]
impl From<SignedLimits> for MatcherConfig {
    fn from(limits: SignedLimits) -> Self {
        Self::from_signed(limits.max_digits, limits.max_decimal_places)
    }
}

impl MatcherConfig {
    /// Create a configuration with no explicit limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from signed limits.
    ///
    /// For limits read from loosely-typed sources (forms, JSON numbers):
    /// - `max_digits <= 0` falls back to the default
    /// - `max_decimal_places < 0` disables the decimal-places check
    /// - values beyond `u32::MAX` saturate
    pub fn from_signed(max_digits: Option<i64>, max_decimal_places: Option<i64>) -> Self {
        let saturate = |v: i64| u32::try_from(v).unwrap_or(u32::MAX);
        Self {
            max_digits: max_digits.filter(|&d| d > 0).map(saturate),
            max_decimal_places: max_decimal_places.filter(|&p| p >= 0).map(saturate),
        }
    }

    /// Builder method: Set maximum significant digits
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Builder method: Set maximum decimal places
    pub fn with_max_decimal_places(mut self, max_decimal_places: u32) -> Self {
        self.max_decimal_places = Some(max_decimal_places);
        self
    }

    /// Significant-digit limit actually enforced
    #[inline]
    pub fn effective_max_digits(&self) -> u32 {
        match self.max_digits {
            Some(d) if d > 0 => d,
            _ => DEFAULT_MAX_DIGITS,
        }
    }

    /// Decimal-place limit actually enforced, if any
    #[inline]
    pub fn effective_max_decimal_places(&self) -> Option<u32> {
        self.max_decimal_places
    }

    /// Validate the configuration.
    ///
    /// Rejects an explicit zero digit limit, which a caller almost certainly
    /// did not mean since it is silently replaced by the default.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_digits == Some(0) {
            return Err(format!(
                "Max digits must be positive (0 falls back to {DEFAULT_MAX_DIGITS})"
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MatcherConfig {
    /// Whole numbers only
    /// - No fractional digits
    /// - Caller-chosen digit limit
    pub fn integer_only(max_digits: u32) -> Self {
        Self::new()
            .with_max_digits(max_digits)
            .with_max_decimal_places(0)
    }

    /// Monetary amounts
    /// - Default digit limit (11)
    /// - Two decimal places (cents)
    pub fn money() -> Self {
        Self::new()
            .with_max_digits(DEFAULT_MAX_DIGITS)
            .with_max_decimal_places(2)
    }
}
