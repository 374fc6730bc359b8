//! LZW-specific error types.

use thiserror::Error;

/// LZW decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// The stream references a code the dictionary cannot have yet.
    #[error("Invalid LZW code: {0}")]
    InvalidCode(u16),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
