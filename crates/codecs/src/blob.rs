//! Variable-length hex blob codec.
//!
//! Blobs are stored as lowercase hex text without a prefix and presented with
//! a `0x` prefix. There is no length invariant beyond an even digit count.

use crate::{
    BytesLike, CodecError, CodecResult, StorageCodec,
    bytes_like::{decode_hex, strip_hex_prefix},
};
use alloy::primitives::{Bytes, hex};
use core::fmt;

/// An arbitrary-length byte sequence with hex text representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBlob(Bytes);

impl HexBlob {
    /// Wrap raw bytes.
    pub const fn new(bytes: Bytes) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the stored form: lowercase hex without prefix.
    pub fn to_stored(&self) -> String {
        hex::encode(&self.0)
    }

    /// Returns the number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HexBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(&self.0))
    }
}

impl From<Bytes> for HexBlob {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<HexBlob> for BytesLike {
    fn from(blob: HexBlob) -> Self {
        Self::Raw(blob.0)
    }
}

/// Codec for variable-length hex blobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexCodec;

impl HexCodec {
    /// Encode bytes as lowercase hex without prefix.
    pub fn encode(bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    /// Decode hex text, with or without a `0x`/`0X` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidHex`] on odd digit count or non-hex
    /// characters.
    pub fn decode(text: &str) -> CodecResult<Bytes> {
        decode_hex(text).map(Bytes::from)
    }

    /// Normalize any accepted input to the stored form.
    pub fn to_stored(input: impl Into<BytesLike>) -> CodecResult<String> {
        input.into().to_bytes().map(|bytes| Self::encode(&bytes))
    }

    /// Normalize an optional input to the stored form, passing `None` through.
    pub fn maybe_to_stored<T>(input: Option<T>) -> CodecResult<Option<String>>
    where
        T: Into<BytesLike>,
    {
        input.map(Self::to_stored).transpose()
    }

    /// Rebuild the display value from stored text.
    pub fn display(stored: &str) -> CodecResult<HexBlob> {
        Self::decode(stored).map(HexBlob)
    }

    /// Rebuild an optional display value, passing `None` through.
    pub fn maybe_display(stored: Option<&str>) -> CodecResult<Option<HexBlob>> {
        stored.map(Self::display).transpose()
    }

    /// Validate hex text for a subtype with a fixed byte length.
    ///
    /// The prefix is optional. The digits must be even in number and encode
    /// exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidHex`] carrying `value` if either check
    /// fails.
    pub fn validate_bounded(value: &str, len: usize) -> CodecResult<()> {
        let digits = strip_hex_prefix(value);
        if digits.len() != len * 2 {
            return Err(CodecError::invalid_hex(value));
        }
        decode_hex(value).map(drop)
    }
}

impl StorageCodec for HexCodec {
    type Input = BytesLike;
    type Value = HexBlob;
    type Stored = String;

    fn to_storage(&self, input: BytesLike) -> CodecResult<String> {
        Self::to_stored(input)
    }

    fn from_storage(&self, raw: String) -> CodecResult<HexBlob> {
        Self::display(&raw)
    }

    fn validate(&self, external: &str) -> bool {
        decode_hex(external).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_form_has_no_prefix() {
        assert_eq!(HexCodec::to_stored("0xDEADbeef").unwrap(), "deadbeef");
        assert_eq!(HexCodec::to_stored("0XDEADbeef").unwrap(), "deadbeef");
        assert_eq!(HexCodec::to_stored("deadbeef").unwrap(), "deadbeef");
        assert_eq!(HexCodec::to_stored(vec![0xdeu8, 0xad]).unwrap(), "dead");
        let blob = HexBlob::new(Bytes::from_static(&[0xbe, 0xef]));
        assert_eq!(HexCodec::to_stored(blob).unwrap(), "beef");
    }

    #[test]
    fn display_form_has_prefix() {
        let blob = HexCodec::display("deadbeef").unwrap();
        assert_eq!(blob.to_string(), "0xdeadbeef");
        assert_eq!(blob.to_stored(), "deadbeef");
        assert_eq!(blob.len(), 4);
        assert_eq!(HexCodec::display("").unwrap().to_string(), "0x");
    }

    #[test]
    fn odd_digits_are_rejected() {
        assert_eq!(HexCodec::decode("0x123"), Err(CodecError::invalid_hex("0x123")));
        assert_eq!(HexCodec::to_stored("abc"), Err(CodecError::invalid_hex("abc")));
    }

    #[test]
    fn bounded_validation() {
        let digits = "ab".repeat(32);
        assert_eq!(HexCodec::validate_bounded(&digits, 32), Ok(()));
        assert_eq!(HexCodec::validate_bounded(&format!("0x{digits}"), 32), Ok(()));

        let short = "ab".repeat(31);
        assert_eq!(HexCodec::validate_bounded(&short, 32), Err(CodecError::invalid_hex(&short)));

        let odd = format!("{digits}a");
        assert_eq!(HexCodec::validate_bounded(&odd, 32), Err(CodecError::invalid_hex(&odd)));

        let not_hex = format!("{}zz", "ab".repeat(31));
        assert_eq!(
            HexCodec::validate_bounded(&not_hex, 32),
            Err(CodecError::invalid_hex(&not_hex))
        );
    }

    #[test]
    fn none_passes_through() {
        assert_eq!(HexCodec::maybe_to_stored(None::<&str>), Ok(None));
        assert_eq!(HexCodec::maybe_display(None), Ok(None));
        assert_eq!(HexCodec.maybe_from_storage(None), Ok(None));
    }
}
