//! Error types for codec operations.

/// Result type alias for codec operations.
pub type CodecResult<T, E = CodecError> = Result<T, E>;

/// Error type for codec operations.
///
/// Every variant carries the offending raw input, rendered as text, so that
/// callers can build user-facing diagnostics without holding on to the
/// original value. None of these errors are transient: a rejected value will
/// be rejected again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input is not decodable as hexadecimal.
    #[error("invalid hex: {value}")]
    InvalidHex {
        /// The offending raw value.
        value: String,
    },

    /// The decoded byte length does not match the required length.
    #[error("invalid length for {value}: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// The offending raw value.
        value: String,
        /// The required length in bytes.
        expected: usize,
        /// The decoded length in bytes.
        got: usize,
    },

    /// The address bytes are valid, but the capitalization does not match the
    /// EIP-55 checksum.
    #[error("invalid EIP-55 checksum: {value}")]
    InvalidChecksum {
        /// The offending raw value.
        value: String,
    },

    /// The integer lies outside `[0, 2**256 - 1]`.
    #[error("value out of uint256 range: {value}")]
    Overflow {
        /// The offending raw value.
        value: String,
    },

    /// The text is not a plain base-10 integer.
    #[error("invalid decimal integer: {value}")]
    InvalidDecimal {
        /// The offending raw value.
        value: String,
    },
}

impl CodecError {
    /// Create an [`CodecError::InvalidHex`] for the given raw value.
    pub fn invalid_hex(value: impl Into<String>) -> Self {
        Self::InvalidHex { value: value.into() }
    }

    /// Create an [`CodecError::InvalidLength`] for the given raw value.
    pub fn invalid_length(value: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::InvalidLength { value: value.into(), expected, got }
    }

    /// Create an [`CodecError::Overflow`] for the given raw value.
    pub fn overflow(value: impl Into<String>) -> Self {
        Self::Overflow { value: value.into() }
    }

    /// Returns the offending raw value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidHex { value }
            | Self::InvalidLength { value, .. }
            | Self::InvalidChecksum { value }
            | Self::Overflow { value }
            | Self::InvalidDecimal { value } => value,
        }
    }
}
