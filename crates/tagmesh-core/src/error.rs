//! Error types for engine operations.
//!
//! Provides structured error handling instead of panics.

use std::error::Error;
use std::fmt;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A post's tag set contained the same tag more than once. The engine
    /// rejects the post before mutating anything; deduplication is the
    /// producer's contract.
    DuplicateTag(String),
    /// Invalid engine configuration.
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::DuplicateTag(tag) => {
                write!(f, "Duplicate tag in post: {}", tag)
            }
            EngineError::InvalidConfig {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
        }
    }
}

impl Error for EngineError {}

// Convenience constructors
impl EngineError {
    pub fn duplicate_tag(tag: impl Into<String>) -> Self {
        EngineError::DuplicateTag(tag.into())
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidConfig {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
