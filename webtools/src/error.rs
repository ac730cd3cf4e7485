// src/error.rs
use thiserror::Error;

/// A caller-recoverable input problem. The message is meant to be shown to
/// the user as-is so they can correct the input and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub reason: String,
}

impl ValidationError {
    #[inline]
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
