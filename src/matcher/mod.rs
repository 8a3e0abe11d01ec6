// ============================================================================
// Matcher Module
// Value matcher implementations
// ============================================================================

mod decimal_matcher;

pub use decimal_matcher::DecimalMatcher;
