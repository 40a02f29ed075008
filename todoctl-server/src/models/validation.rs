//! Validation error types

use std::fmt;

/// Validation error for request input that the extractors reject
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// String doesn't parse into the required type (e.g., integer id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Query string or body failed to deserialize
    Rejected { source: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Rejected { source, reason } => {
                write!(f, "{}: {}", source, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
