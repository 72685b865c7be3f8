//! Error types for grove.
//!
//! The tree operations themselves never fail: missing targets are
//! self-healed and malformed shapes degrade to no-ops, so callers can chain
//! edits without error plumbing. The one real failure boundary is the
//! external parse adapter, which gets an explicit error kind instead of
//! being swallowed.

use thiserror::Error;

/// Errors that can occur at the crate's external boundaries.
#[derive(Debug, Error)]
pub enum GroveError {
    /// The HTML parse adapter rejected the input outright.
    ///
    /// Not raised for merely malformed markup (the adapter recovers from
    /// that on its own), only for inputs it refuses to process at all.
    #[error("parse adapter error: {0}")]
    Adapter(String),
}

/// Result type alias for grove operations.
pub type GroveResult<T> = Result<T, GroveError>;

impl GroveError {
    /// Wrap any adapter-side error.
    pub fn adapter(err: impl std::error::Error) -> Self {
        Self::Adapter(err.to_string())
    }
}
