//! Validation errors surfaced by the fields.

use eth_codecs::CodecError;

/// Result type alias for field operations.
pub type FieldResult<T, E = ValidationError> = Result<T, E>;

/// A user-facing validation failure.
///
/// Carries a stable machine-readable `code`, a message rendered from a
/// template with the offending raw value, and the codec error that caused it,
/// if any.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    code: &'static str,
    message: String,
    #[source]
    source: Option<CodecError>,
}

impl ValidationError {
    /// Code for values that cannot be interpreted at all.
    pub const INVALID: &'static str = "invalid";
    /// Code for values of the wrong byte length.
    pub const LENGTH: &'static str = "length";
    /// Code for values longer than the column allows.
    pub const MAX_LENGTH: &'static str = "max_length";
    /// Code for integers outside the uint256 range.
    pub const OVERFLOW: &'static str = "overflow";

    /// Create a validation error.
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), source: None }
    }

    /// Attach the codec error that caused this failure.
    pub fn with_source(mut self, source: CodecError) -> Self {
        self.source = Some(source);
        self
    }

    /// The address is not an EIP-55 checksummed address.
    pub fn invalid_address(value: &str) -> Self {
        Self::new(
            Self::INVALID,
            format!(r#""{value}" value must be an EIP55 checksummed address."#),
        )
    }

    /// The hash is not hexadecimal.
    pub fn invalid_hash(value: &str) -> Self {
        Self::new(Self::INVALID, format!(r#""{value}" hash must be a 32 bytes hexadecimal."#))
    }

    /// The hash does not decode to 32 bytes.
    pub fn hash_length(value: &str) -> Self {
        Self::new(Self::LENGTH, format!(r#""{value}" hash must have exactly 32 bytes."#))
    }

    /// The value is not hexadecimal.
    pub fn invalid_hex(value: &str) -> Self {
        Self::new(Self::INVALID, format!(r#""{value}" value must be hexadecimal."#))
    }

    /// The value exceeds the column length.
    pub fn max_length(max: usize, len: usize) -> Self {
        Self::new(
            Self::MAX_LENGTH,
            format!("Ensure this value has at most {max} characters (it has {len})."),
        )
    }

    /// The integer is malformed or out of range.
    pub fn invalid_uint256(value: &str, code: &'static str) -> Self {
        Self::new(code, format!(r#""{value}" value must be an unsigned 256-bit integer."#))
    }

    /// Returns the machine-readable code.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the codec error that caused this failure, if any.
    pub const fn codec_error(&self) -> Option<&CodecError> {
        self.source.as_ref()
    }

    /// Log the rejection and return self.
    pub(crate) fn rejected(self) -> Self {
        tracing::debug!(
            target: "codec::fields",
            code = self.code,
            error = ?self.source,
            "{}",
            self.message
        );
        self
    }
}
