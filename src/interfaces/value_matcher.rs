// ============================================================================
// Value Matcher Interface
// Defines the contract for pluggable value validators
// ============================================================================

use crate::domain::ValidationResult;
use crate::numeric::ExactDecimal;
use rust_decimal::Decimal;

/// Value handed to a matcher.
///
/// Anything that is not already a decimal is matched through its string
/// representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate<'a> {
    /// No value supplied (null-equivalent)
    Absent,
    /// Textual value to be parsed
    Text(&'a str),
    /// Already-parsed exact decimal
    Exact(ExactDecimal),
}

impl Candidate<'_> {
    /// True for [`Candidate::Absent`]
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Candidate::Absent)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Text(value.as_str())
    }
}

impl From<ExactDecimal> for Candidate<'_> {
    fn from(value: ExactDecimal) -> Self {
        Candidate::Exact(value)
    }
}

impl From<Decimal> for Candidate<'_> {
    fn from(value: Decimal) -> Self {
        Candidate::Exact(ExactDecimal::from(value))
    }
}

impl<'a, T: Into<Candidate<'a>>> From<Option<T>> for Candidate<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Absent, Into::into)
    }
}

macro_rules! impl_candidate_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Candidate<'_> {
                fn from(value: $t) -> Self {
                    Candidate::Exact(ExactDecimal::from(value))
                }
            }
        )*
    };
}

impl_candidate_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Strategy interface for value validators.
///
/// Implementations never fail: every problem with the value is reported as
/// an entry of the returned [`ValidationResult`]. An absent value is valid;
/// enforcing presence is the caller's job.
pub trait ValueMatcher: Send + Sync {
    /// Validate a single value
    fn match_value(&self, value: Candidate<'_>) -> ValidationResult;

    /// Get the matcher name for logging
    fn name(&self) -> &str;

    /// Validate and collapse to a boolean
    fn is_valid(&self, value: Candidate<'_>) -> bool {
        self.match_value(value).is_valid()
    }
}
