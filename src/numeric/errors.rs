// ============================================================================
// Numeric Errors
// Error types for exact decimal parsing and conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or converting an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a decimal literal
    InvalidInput,
    /// Exponent does not fit the internal exponent range
    ExponentOverflow,
    /// Value is too large for the target type
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ExponentOverflow => {
                write!(f, "exponent overflow: exponent is out of range")
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeded the target type's range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
