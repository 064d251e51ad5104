//! Error handling for the huffpack library.

use thiserror::Error;

/// Main error type for the huffpack library.
#[derive(Error, Debug)]
pub enum HuffError {
    /// Input that cannot be coded: too short, or an unusable chunk width
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Error message describing the issue
        message: String,
    },

    /// Chunk data that cannot be decoded back into symbols
    #[error("decode error: {message}")]
    Decode {
        /// Error message describing the issue
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Result type alias for operations that can fail with a HuffError.
pub type Result<T> = std::result::Result<T, HuffError>;
