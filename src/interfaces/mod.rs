// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod value_matcher;

pub use value_matcher::{Candidate, ValueMatcher};
