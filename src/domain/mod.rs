// ============================================================================
// Domain Models Module
// Configuration and validation result value objects
// ============================================================================

pub mod config;
pub mod validation;

pub use config::{MatcherConfig, DEFAULT_MAX_DIGITS};
pub use validation::{ErrorCode, ErrorKind, ValidationError, ValidationResult};
