// ============================================================================
// Validation Result
// Ordered, coded error entries produced by a matcher
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Error Codes
// ============================================================================

/// Stable error codes emitted by the decimal matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Value is not a decimal number
    InvalidDecimal,
    /// Significant-digit count exceeds the digit limit
    MaxDigitsExceeded,
    /// Fractional-digit count exceeds the decimal-place limit
    MaxDecimalPlacesExceeded,
}

impl ErrorCode {
    /// Wire-stable code string
    pub const fn code(self) -> &'static str {
        match self {
            ErrorCode::InvalidDecimal => "doubleNumber.e001",
            ErrorCode::MaxDigitsExceeded => "doubleNumber.e002",
            ErrorCode::MaxDecimalPlacesExceeded => "doubleNumber.e003",
        }
    }

    /// Human-readable message
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::InvalidDecimal => "The value is not a valid decimal number.",
            ErrorCode::MaxDigitsExceeded => "The value exceeded maximum number of digits.",
            ErrorCode::MaxDecimalPlacesExceeded => {
                "The value exceeded maximum number of decimal places."
            },
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Error Entries
// ============================================================================

/// Category of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ErrorKind {
    /// Value is present but has the wrong shape or exceeds a limit
    InvalidType,
    /// Value is required but absent (reserved for callers enforcing presence)
    MissingValue,
}

/// A single coded validation error
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create an `InvalidType` error
    pub fn invalid_type(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidType, code, message)
    }
}

impl From<ErrorCode> for ValidationError {
    fn from(code: ErrorCode) -> Self {
        Self::invalid_type(code.code(), code.message())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ============================================================================
// Validation Result
// ============================================================================

/// Ordered collection of validation errors; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    errors: SmallVec<[ValidationError; 2]>,
}

impl ValidationResult {
    /// Create an empty (valid) result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Append an `InvalidType` error
    pub fn add_invalid_type_error(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.add_error(ValidationError::invalid_type(code, message));
    }

    /// Append all errors from another result, preserving order
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Errors in insertion order
    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// True when no errors were recorded
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check whether an error with the given code was recorded
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Codes in insertion order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.code.as_str())
    }

    /// `Ok(())` when valid, otherwise the result itself as the error
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::InvalidDecimal.code(), "doubleNumber.e001");
        assert_eq!(ErrorCode::MaxDigitsExceeded.code(), "doubleNumber.e002");
        assert_eq!(ErrorCode::MaxDecimalPlacesExceeded.code(), "doubleNumber.e003");
        assert_eq!(
            ErrorCode::MaxDecimalPlacesExceeded.message(),
            "The value exceeded maximum number of decimal places."
        );
        assert_eq!(ErrorCode::InvalidDecimal.to_string(), "doubleNumber.e001");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.to_string(), "valid");
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_add_errors_preserves_order() {
        let mut result = ValidationResult::new();
        result.add_error(ErrorCode::MaxDigitsExceeded.into());
        result.add_invalid_type_error("custom.e100", "Custom failure.");

        assert!(!result.is_valid());
        assert_eq!(result.len(), 2);
        assert!(result.has_code("doubleNumber.e002"));
        assert!(!result.has_code("doubleNumber.e001"));
        assert_eq!(
            result.codes().collect::<Vec<_>>(),
            vec!["doubleNumber.e002", "custom.e100"]
        );
        assert!(result.errors().iter().all(|e| e.kind == ErrorKind::InvalidType));
    }

    #[test]
    fn test_merge() {
        let mut first = ValidationResult::new();
        first.add_error(ErrorCode::InvalidDecimal.into());

        let mut second = ValidationResult::new();
        second.add_error(ValidationError::new(
            ErrorKind::MissingValue,
            "field.required",
            "Value is required.",
        ));
        second.add_error(ErrorCode::MaxDigitsExceeded.into());

        first.merge(second);
        assert_eq!(first.len(), 3);
        assert_eq!(first.errors()[1].kind, ErrorKind::MissingValue);
    }

    #[test]
    fn test_display_and_into_result() {
        let mut result = ValidationResult::new();
        result.add_error(ErrorCode::MaxDigitsExceeded.into());
        result.add_error(ErrorCode::MaxDecimalPlacesExceeded.into());

        assert_eq!(
            result.to_string(),
            "doubleNumber.e002: The value exceeded maximum number of digits.; \
             doubleNumber.e003: The value exceeded maximum number of decimal places."
        );

        let err = result.clone().into_result().unwrap_err();
        assert_eq!(err, result);
    }

    #[test]
    fn test_into_iterator() {
        let mut result = ValidationResult::new();
        result.add_error(ErrorCode::InvalidDecimal.into());

        let borrowed: Vec<&str> = (&result).into_iter().map(|e| e.code.as_str()).collect();
        assert_eq!(borrowed, vec!["doubleNumber.e001"]);

        let owned: Vec<ValidationError> = result.into_iter().collect();
        assert_eq!(owned[0].message, "The value is not a valid decimal number.");
    }
}
