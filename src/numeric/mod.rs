// ============================================================================
// Numeric Module
// Exact arbitrary-precision decimals for digit-count validation
// ============================================================================
//
// This module provides:
// - ExactDecimal: parsed decimal literal with unbounded precision
// - NumericError: Error types for parsing and conversion
//
// Design principles:
// - No floating-point operations
// - Parsing and conversion return Result (no panics)
// - Digits are kept as written, so counts never depend on a mantissa width
// - rust_decimal::Decimal interop at API boundaries only

mod errors;
mod exact_decimal;

pub use errors::{NumericError, NumericResult};
pub use exact_decimal::ExactDecimal;
