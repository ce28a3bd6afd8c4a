use thiserror::Error;

use crate::alloc_prelude::*;

/// Errors from the configuration edge of the library.
///
/// The set operations themselves have no runtime error path: constraint
/// violations are compile errors and name formatting degrades to the raw
/// name instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TysetError {
    /// Verbosity string not recognized
    #[error("unknown verbosity `{0}` (expected `bare`, `qualified`, or `raw`)")]
    UnknownVerbosity(String),

    /// Verbosity level outside 0..=2
    #[error("verbosity level {0} out of range (expected 0..=2)")]
    VerbosityOutOfRange(u8),
}

/// Result type for fallible tyset operations
pub type Result<T> = core::result::Result<T, TysetError>;
