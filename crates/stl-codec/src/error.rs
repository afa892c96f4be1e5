//! Error types for STL encoding and decoding.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding, encoding, or converting STL.
///
/// Format errors are not transient: every variant is returned
/// synchronously to the caller of the failing step, with no retry and
/// no partial output.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input buffer shorter than a structurally required length.
    #[error("truncated input: needed {needed} bytes, only {available} available")]
    TruncatedInput {
        /// Bytes the structure requires.
        needed: usize,
        /// Bytes actually present.
        available: usize,
    },

    /// ASCII input missing required lines, or a token that fails
    /// numeric parsing.
    #[error("malformed input: {message}")]
    MalformedInput {
        /// Description of what was malformed.
        message: String,
    },

    /// Solid name too long for the 80-byte binary header.
    #[error("header too long: name is {len} bytes, the binary header holds 80")]
    HeaderTooLong {
        /// Byte length of the offending name.
        len: usize,
    },

    /// Target format selector not one of the two recognized values.
    #[error("unsupported target format {value:?} (expected \"STLB\" or \"STLA\")")]
    UnsupportedTargetFormat {
        /// The unrecognized selector.
        value: String,
    },

    /// I/O error from the standard library (file convenience paths only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Create a `MalformedInput` error with the given message.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }
}
