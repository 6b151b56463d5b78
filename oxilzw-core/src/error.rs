//! Error types for OxiLZW operations.
//!
//! The codec itself is close to infallible: malformed streams decode to a
//! best-effort prefix instead of failing. What remains here are argument
//! errors at the API boundary, bit-width misuse of the bit buffer, and I/O
//! errors surfaced by the command-line front end.

use std::io;
use thiserror::Error;

/// The main error type for OxiLZW operations.
#[derive(Debug, Error)]
pub enum OxiLzwError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument was absent or outside its accepted range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A bit count outside the range supported by the bit buffer.
    #[error("Invalid bit width: {0} (must be 1-16)")]
    InvalidBitWidth(u8),

    /// The encoder's forward table lost an entry it had already matched.
    #[error("Forward table has no codeword for a {len}-byte sequence")]
    MissingCodeword {
        /// Length of the sequence that was looked up.
        len: usize,
    },
}

/// Result type alias for OxiLZW operations.
pub type Result<T> = std::result::Result<T, OxiLzwError>;

impl OxiLzwError {
    /// Create an invalid argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error for an absent input.
    pub fn absent(name: &'static str) -> Self {
        Self::invalid_argument(name, "value is absent")
    }

    /// Create a missing codeword error.
    pub fn missing_codeword(len: usize) -> Self {
        Self::MissingCodeword { len }
    }
}
