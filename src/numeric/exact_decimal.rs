// ============================================================================
// Exact Decimal
// Arbitrary-precision decimal literal with digit-count accessors
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;

/// Largest exponent magnitude accepted by the parser.
pub const MAX_EXPONENT: i64 = 9_000_000_000_000_000;

/// Exponents outside this window are rendered in scientific notation.
const PLAIN_EXPONENT_MIN: i64 = -7;
const PLAIN_EXPONENT_MAX: i64 = 21;

/// Largest scale `rust_decimal::Decimal` can carry.
const DECIMAL_MAX_SCALE: u64 = 28;

/// Exact decimal number with unbounded precision.
///
/// Stored as a sign, the significant digits (leading and trailing zeros
/// stripped) and the decimal exponent of the most significant digit:
///
/// | literal  | digits  | exponent |
/// |----------|---------|----------|
/// | `123.45` | `12345` | `2`      |
/// | `0.001`  | `1`     | `-3`     |
/// | `1500`   | `15`    | `3`      |
/// | `0`      | `0`     | `0`      |
///
/// The representation is canonical, so derived equality is numeric equality
/// (`1.50 == 1.5`, `-0 == 0`).
///
/// # Example
/// ```
/// use decimal_matcher::numeric::ExactDecimal;
///
/// let x: ExactDecimal = "-1200.050".parse().unwrap();
/// assert_eq!(x.precision(), 6);
/// assert_eq!(x.decimal_places(), 2);
/// assert_eq!(x.to_string(), "-1200.05");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExactDecimal {
    negative: bool,
    digits: Vec<u8>,
    exponent: i64,
}

impl ExactDecimal {
    /// Zero value
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: vec![0],
            exponent: 0,
        }
    }

    /// Build from ASCII digits whose first digit sits at `leading_exponent`.
    ///
    /// Leading and trailing zeros are stripped here; callers only need to
    /// supply digits and the position of the first one.
    fn from_ascii_digits(negative: bool, ascii: &[u8], leading_exponent: i64) -> Self {
        let first = match ascii.iter().position(|&b| b != b'0') {
            Some(first) => first,
            None => return Self::zero(),
        };
        // A nonzero digit exists, so rposition always finds one.
        let last = ascii.iter().rposition(|&b| b != b'0').unwrap_or(first);

        Self {
            negative,
            digits: ascii[first..=last].iter().map(|b| b - b'0').collect(),
            exponent: leading_exponent.saturating_sub(first as i64),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Significant digits, most significant first (values 0-9).
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Decimal exponent of the most significant digit.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of significant digits.
    ///
    /// Leading zeros are not counted; zeros between the last nonzero digit
    /// and the decimal point are (`100` has three, `0.001` has one).
    pub fn precision(&self) -> u64 {
        let coefficient = self.digits.len() as u64;
        let integer_digits = self.exponent.saturating_add(1).max(0) as u64;
        coefficient.max(integer_digits)
    }

    /// Number of digits after the decimal point, trailing zeros excluded.
    pub fn decimal_places(&self) -> u64 {
        let places = (self.digits.len() as i64)
            .saturating_sub(self.exponent)
            .saturating_sub(1);
        places.max(0) as u64
    }

    // ========================================================================
    // Conversion to rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if more than 28 decimal places are needed
    /// - `Overflow` if the value does not fit a 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let scale = self.decimal_places();
        if scale > DECIMAL_MAX_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let trailing_zeros = self.precision() - self.digits.len() as u64;
        if trailing_zeros > DECIMAL_MAX_SCALE + 1 {
            return Err(NumericError::Overflow);
        }

        let mut mantissa: i128 = 0;
        let padded = self
            .digits
            .iter()
            .copied()
            .chain(std::iter::repeat(0).take(trailing_zeros as usize));
        for digit in padded {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i128::from(digit)))
                .ok_or(NumericError::Overflow)?;
        }
        if self.negative {
            mantissa = -mantissa;
        }

        Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for ExactDecimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for ExactDecimal {
    fn from(d: Decimal) -> Self {
        let mantissa = d.mantissa();
        let ascii = mantissa.unsigned_abs().to_string();
        let leading_exponent = ascii.len() as i64 - 1 - i64::from(d.scale());
        Self::from_ascii_digits(mantissa < 0, ascii.as_bytes(), leading_exponent)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ExactDecimal {
                fn from(value: $t) -> Self {
                    let text = value.to_string();
                    let (negative, body) = match text.strip_prefix('-') {
                        Some(rest) => (true, rest),
                        None => (false, text.as_str()),
                    };
                    Self::from_ascii_digits(negative, body.as_bytes(), body.len() as i64 - 1)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExactDecimal({}, exponent={})", self, self.exponent)
    }
}

impl fmt::Display for ExactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.digits.iter().map(|d| char::from(b'0' + d)).collect();
        let sign = if self.negative { "-" } else { "" };
        let e = self.exponent;

        if e <= PLAIN_EXPONENT_MIN || e >= PLAIN_EXPONENT_MAX {
            // Scientific: d.ddde[+-]N
            let (head, tail) = digits.split_at(1);
            let exp_sign = if e > 0 { "+" } else { "" };
            if tail.is_empty() {
                write!(f, "{sign}{head}e{exp_sign}{e}")
            } else {
                write!(f, "{sign}{head}.{tail}e{exp_sign}{e}")
            }
        } else if e < 0 {
            let zeros = "0".repeat((-e - 1) as usize);
            write!(f, "{sign}0.{zeros}{digits}")
        } else {
            let integer_len = (e + 1) as usize;
            if digits.len() > integer_len {
                let (int_part, frac_part) = digits.split_at(integer_len);
                write!(f, "{sign}{int_part}.{frac_part}")
            } else {
                let zeros = "0".repeat(integer_len - digits.len());
                write!(f, "{sign}{digits}{zeros}")
            }
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn all_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse the part after `e`/`E`: optional sign then at least one digit.
fn parse_exponent(s: &str) -> NumericResult<i64> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if body.is_empty() || !all_ascii_digits(body) {
        return Err(NumericError::InvalidInput);
    }

    // Only digits remain, so the sole failure mode is overflow.
    let magnitude: i64 = body.parse().map_err(|_| NumericError::ExponentOverflow)?;
    Ok(if negative { -magnitude } else { magnitude })
}

impl std::str::FromStr for ExactDecimal {
    type Err = NumericError;

    /// Parse a decimal literal.
    ///
    /// Grammar: `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`.
    /// Whitespace, digit grouping, `NaN`/`Infinity` and radix prefixes
    /// (`0x`, `0b`, `0o`) are rejected with `InvalidInput`: they are not
    /// decimal numbers with a `.` separator. Exponents that overflow `i64`,
    /// or a value exponent beyond [`MAX_EXPONENT`], are rejected with
    /// `ExponentOverflow` rather than collapsing to infinity or zero.
    ///
    /// # Examples
    /// - "123.456" -> digits 123456, exponent 2
    /// - "-.5" -> digits 5, exponent -1
    /// - "1.5e3" -> digits 15, exponent 3
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Check for sign
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(NumericError::InvalidInput),
        };

        // Split off exponent
        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&body[..pos], parse_exponent(&body[pos + 1..])?),
            None => (body, 0),
        };

        // Split on decimal point
        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !all_ascii_digits(int_str) || !all_ascii_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }

        let leading_exponent = (int_str.len() as i64 - 1)
            .checked_add(exponent)
            .ok_or(NumericError::ExponentOverflow)?;

        let mut ascii = Vec::with_capacity(int_str.len() + frac_str.len());
        ascii.extend_from_slice(int_str.as_bytes());
        ascii.extend_from_slice(frac_str.as_bytes());

        let mut value = Self::from_ascii_digits(negative, &ascii, leading_exponent);
        if value.is_zero() {
            value.negative = false;
        }
        if value.exponent.unsigned_abs() > MAX_EXPONENT as u64 {
            return Err(NumericError::ExponentOverflow);
        }

        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
