//! Error types for Heatlens.
//!
//! This module provides a unified error handling approach using `thiserror`.
//!
//! The heat-overlay core itself never fails: unmeasurable regions defer,
//! degenerate series render as transparent, out-of-range parameters clamp.
//! What remains is the ambient failure surface of the host application.

use thiserror::Error;

/// Result type alias for Heatlens operations.
pub type Result<T> = std::result::Result<T, HeatlensError>;

/// Errors that can occur in Heatlens.
#[derive(Debug, Error)]
pub enum HeatlensError {
    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
